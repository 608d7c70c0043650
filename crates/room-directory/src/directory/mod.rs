//! Presence directory implementations

mod error;
mod mysql;
mod postgres;

pub use mysql::MySqlPresenceDirectory;
pub use postgres::PgPresenceDirectory;

pub(crate) use error::map_db_error;
