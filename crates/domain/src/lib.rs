//! # assetdesk-domain
//!
//! Pure domain model for the assetdesk IT-asset administration service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, loose column values, errors, timestamps
//! - Define **Employees** and the **Departments** they belong to
//! - Define **Devices** and the **Assignments** that lend them to employees
//! - Define the five **Account** kinds and their caller-shaped records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod field;
pub mod id;
pub mod time;

pub mod account;
pub mod assignment;
pub mod department;
pub mod device;
pub mod employee;
