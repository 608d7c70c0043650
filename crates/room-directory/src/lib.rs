//! # room-directory
//!
//! sqlx-backed implementations of the `PresenceDirectory` port, one per
//! supported SQL dialect. Both adapters speak to the same one-table
//! schema:
//!
//! ```sql
//! CREATE TABLE room (
//!     id     BIGSERIAL PRIMARY KEY,      -- BIGINT AUTO_INCREMENT on MySQL
//!     name   VARCHAR(15) UNIQUE NOT NULL,
//!     online BOOLEAN NOT NULL DEFAULT TRUE
//! );
//! ```
//!
//! Dialect-specific DDL lives under `migrations/`.

pub mod directory;
pub mod pool;

pub use directory::{MySqlPresenceDirectory, PgPresenceDirectory};
pub use pool::{create_mysql_pool, create_pg_pool, PoolConfig};
