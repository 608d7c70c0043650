//! Integration test utilities for the chat room client
//!
//! This crate provides in-process stand-ins for the presence directory
//! and the message bus so the orchestration core can be driven
//! end-to-end without a database or a broker.


pub use stubs::*;
