//! Error handling utilities for the directory adapters

use room_core::DirectoryError;
use sqlx::Error as SqlxError;

/// Convert a sqlx error to a DirectoryError
///
/// Connection-level failures (pool exhaustion, broken socket) become
/// `Unavailable`; everything else is a `Query` failure.
pub fn map_db_error(e: SqlxError) -> DirectoryError {
    match e {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
            DirectoryError::Unavailable(e.to_string())
        }
        other => DirectoryError::Query(other.to_string()),
    }
}
