//! Application error type
//!
//! Aggregates the per-layer error types at the binary boundary. The
//! propagation policy lives with each variant's source: only startup
//! failures reach this type; steady-state degradations are handled (and
//! logged) where they occur.

use room_core::{BusError, DirectoryError, DomainError};

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Malformed or missing startup configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Invalid user input before any collaborator is contacted
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Presence directory failures (fatal only at registration)
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    // Message bus failures (fatal only at initial connect)
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
