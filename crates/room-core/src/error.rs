//! Domain error taxonomy
//!
//! Startup failures are fatal; steady-state failures degrade gracefully.
//! The split lives here so every layer can say precisely which kind of
//! failure it is surfacing instead of logging-and-exiting uniformly.

/// Errors produced by the domain layer itself
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid display name: {0}")]
    InvalidDisplayName(String),
}

/// Errors from the presence directory
///
/// Fatal only for the initial registration. Polling-time failures skip
/// the affected tick; `mark_offline` failures at shutdown are logged and
/// otherwise ignored.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    #[error("directory query failed: {0}")]
    Query(String),
}

/// Errors from the message bus
///
/// Fatal for the initial connect/declare/subscribe. A failed publish at
/// steady state drops the affected line only.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("bus connection failed: {0}")]
    Connection(String),

    #[error("bus topology setup failed: {0}")]
    Topology(String),

    #[error("subscribe failed: {0}")]
    Subscribe(String),

    #[error("publish failed: {0}")]
    Publish(String),
}
