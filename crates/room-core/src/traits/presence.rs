//! Presence directory port
//!
//! The directory is the persistent record of who is currently in the
//! room. The orchestration layer only ever sees this trait; the SQL
//! dialect behind it is an implementation detail of the adapter crate.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::DirectoryError;
use crate::identity::DisplayName;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The persistent store of online participants
#[async_trait]
pub trait PresenceDirectory: Send + Sync {
    /// Insert-or-update the row keyed by `name`, mark it online, and
    /// return its stable id
    async fn register(&self, name: &DisplayName) -> DirectoryResult<i64>;

    /// Names currently marked online, excluding the given participant id
    async fn list_online(&self, excluding: i64) -> DirectoryResult<HashSet<String>>;

    /// Mark the participant's row offline
    async fn mark_offline(&self, id: i64) -> DirectoryResult<()>;
}
