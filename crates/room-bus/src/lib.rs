//! # room-bus
//!
//! AMQP adapters for the room's fanout topic: one durable fanout
//! exchange that every participant publishes to, and one exclusive
//! auto-delete queue per participant bound to it with no routing key.
//! Delivery is best-effort fanout; nothing is persisted.

pub mod connection;
pub mod publisher;
pub mod subscriber;

pub use connection::BusConnection;
pub use publisher::BusPublisher;
pub use subscriber::Subscription;
