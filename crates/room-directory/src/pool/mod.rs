//! Connection pool management

mod config;
mod mysql;
mod postgres;

pub use config::PoolConfig;
pub use mysql::create_mysql_pool;
pub use postgres::create_pg_pool;
