//! # squadup-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `squadup-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `squadup-app` (for port traits) and `squadup-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod ad_repo;
mod error;
mod game_repo;
mod pool;

pub use ad_repo::SqliteAdRepository;
pub use error::StorageError;
pub use game_repo::SqliteGameRepository;
pub use pool::{Config, Database};
