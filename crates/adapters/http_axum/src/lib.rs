//! # assetdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under a configurable base path
//!   (`/employees`, `/departments`, `/devices`, `/assignments`, `/accounts`)
//! - Answer CORS preflight requests and stamp CORS headers on every response
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `assetdesk-app` (for port traits and services) and
//! `assetdesk-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
