//! # assetdesk-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EmployeeRepository`: CRUD for employees
//!   - `DepartmentRepository`: create and read departments
//!   - `DeviceRepository`: CRUD for devices
//!   - `AssignmentRepository`: record, release and list device loans
//!   - `AccountRepository`: caller-shaped CRUD over the five account tables
//! - Define **driving/inbound ports** as use-case structs, one per resource
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `assetdesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
