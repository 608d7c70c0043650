//! # room-client
//!
//! The orchestration core of the chat room client: one presence poller
//! reconciling the local peer view against the directory, one lifecycle
//! monitor per remote peer, an outbound and an inbound relay between the
//! terminal and the bus, and a manager that starts everything and tears
//! it down race-free when the session ends.

pub mod manager;
pub mod monitor;
pub mod notice;
pub mod poller;
pub mod relay;

pub use manager::{RoomHandle, RoomManager};
pub use monitor::{MonitorHandle, PeerMonitor};
pub use notice::Notice;
pub use poller::{diff_peers, PeerDiff, PresencePoller};
