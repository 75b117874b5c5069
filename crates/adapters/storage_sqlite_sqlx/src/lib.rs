//! # roster-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `roster-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Hand out record identifiers (`INTEGER PRIMARY KEY AUTOINCREMENT`)
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
mod event_repo;
mod person_repo;
pub mod pool;

pub use error::StorageError;
pub use event_repo::SqliteEventRepository;
pub use person_repo::SqlitePersonRepository;
pub use pool::{Config, Database};
