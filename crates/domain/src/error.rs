//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AssetDeskError`] via `From`.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AssetDeskError {
    /// The request could not be turned into a valid operation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The underlying store failed. The source is opaque to the domain.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a request is rejected before it reaches the store.
///
/// The `Display` output is sent verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `sub` account selector is missing or empty.
    #[error("sub param required, e.g. ?sub=domain")]
    MissingAccountKind,

    /// The `sub` account selector names no known account table.
    #[error("invalid sub")]
    InvalidAccountKind(String),

    /// A path identifier is not a valid integer.
    #[error("invalid id")]
    InvalidId(String),

    /// An account write carried no columns at all.
    #[error("account payload must contain at least one column")]
    EmptyAccountRecord,
}
