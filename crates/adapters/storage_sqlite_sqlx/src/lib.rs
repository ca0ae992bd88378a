//! # assetdesk-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `assetdesk-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the schema (using sqlx embedded migrations)
//! - Map between domain types and database rows, binding loose values by JSON type
//!
//! ## Dependency rule
//! Depends on `assetdesk-app` (for port traits) and `assetdesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod account_repo;
mod assignment_repo;
mod department_repo;
mod device_repo;
mod employee_repo;
mod error;
mod pool;
mod value;

pub use account_repo::SqliteAccountRepository;
pub use assignment_repo::SqliteAssignmentRepository;
pub use department_repo::SqliteDepartmentRepository;
pub use device_repo::SqliteDeviceRepository;
pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
