//! # venuehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `LocationRepository` port defined in `venuehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows, seats included
//!
//! ## Dependency rule
//! Depends on `venuehub-app` (for port traits) and `venuehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod location_repo;
mod pool;

pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
