//! # tamagotchi-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `tamagotchi-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `tamagotchi-app` (for port traits) and `tamagotchi-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod feeding_repo;
mod playtime_repo;
mod pool;

pub use error::StorageError;
pub use feeding_repo::SqliteFeedingRepository;
pub use playtime_repo::SqlitePlaytimeRepository;
pub use pool::{Config, Database};
