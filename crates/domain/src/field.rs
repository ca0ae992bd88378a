//! Loosely typed column values.
//!
//! Write bodies are not validated: the JSON value under each key goes to the
//! store as is, and a missing key is null. The store alone decides what it
//! accepts, so whatever it holds comes back out the same loose way.

/// One column value. In an `Option<Field>`, `None` stands for SQL NULL.
pub type Field = serde_json::Value;
