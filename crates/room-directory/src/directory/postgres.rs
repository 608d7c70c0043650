//! PostgreSQL implementation of PresenceDirectory

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use room_core::{DirectoryResult, DisplayName, PresenceDirectory};

use super::map_db_error;

/// PostgreSQL implementation of PresenceDirectory
#[derive(Clone)]
pub struct PgPresenceDirectory {
    pool: PgPool,
}

impl PgPresenceDirectory {
    /// Create a new PgPresenceDirectory
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PresenceDirectory for PgPresenceDirectory {
    #[instrument(skip(self))]
    async fn register(&self, name: &DisplayName) -> DirectoryResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO room (name, online) VALUES ($1, TRUE)
            ON CONFLICT (name) DO UPDATE SET online = TRUE
            RETURNING id
            ",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_online(&self, excluding: i64) -> DirectoryResult<HashSet<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT name FROM room
            WHERE id <> $1 AND online = TRUE
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
            UPDATE room SET online = FALSE WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
