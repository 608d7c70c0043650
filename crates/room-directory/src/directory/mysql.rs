//! MySQL implementation of PresenceDirectory
//!
//! MySQL has no `RETURNING`, so registration is an upsert followed by a
//! lookup of the (unique) name.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::instrument;

use room_core::{DirectoryError, DirectoryResult, DisplayName, PresenceDirectory};

use super::map_db_error;

/// MySQL implementation of PresenceDirectory
#[derive(Clone)]
pub struct MySqlPresenceDirectory {
    pool: MySqlPool,
}

impl MySqlPresenceDirectory {
    /// Create a new MySqlPresenceDirectory
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PresenceDirectory for MySqlPresenceDirectory {
    #[instrument(skip(self))]
    async fn register(&self, name: &DisplayName) -> DirectoryResult<i64> {
        sqlx::query(
            r"
            INSERT INTO room (name, online) VALUES (?, TRUE)
            ON DUPLICATE KEY UPDATE online = TRUE
            ",
        )
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM room WHERE name = ?
            ",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| {
            DirectoryError::Query(format!("registration of '{name}' did not produce a row"))
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_online(&self, excluding: i64) -> DirectoryResult<HashSet<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT name FROM room
            WHERE id <> ? AND online = TRUE
            ",
        )
        .bind(excluding)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(names.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn mark_offline(&self, id: i64) -> DirectoryResult<()> {
        sqlx::query(
            r"
            UPDATE room SET online = FALSE WHERE id = ?
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
