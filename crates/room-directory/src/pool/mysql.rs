//! MySQL connection pool management

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::PoolConfig;

/// Create a new MySQL connection pool
pub async fn create_mysql_pool(config: &PoolConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}
