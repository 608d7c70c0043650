//! # room-common
//!
//! Shared utilities for the chat room client: configuration loading,
//! the application-level error type, and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, BusConfig, ConfigError, DirectoryBackend, DirectoryConfig, RoomConfig};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
