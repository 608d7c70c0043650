//! Chat message wire format
//!
//! One JSON object per chat line. The field names are part of the wire
//! contract shared by every client connected to the exchange; do not
//! rename them.

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::identity::Identity;

/// A single chat line as it travels over the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Directory id of the sender
    #[serde(rename = "UserID")]
    pub sender_id: i64,

    /// Sender's display name at send time
    #[serde(rename = "UserName")]
    pub sender_name: String,

    /// The chat text
    #[serde(rename = "Text")]
    pub text: String,

    /// Send-side wall clock, pre-formatted as `HH:MM:SS`
    #[serde(rename = "CreatedAt")]
    pub sent_at: String,
}

impl ChatMessage {
    /// Build an outbound message from the local identity and the current clock
    #[must_use]
    pub fn compose(identity: &Identity, text: impl Into<String>) -> Self {
        Self {
            sender_id: identity.id(),
            sender_name: identity.name().to_string(),
            text: text.into(),
            sent_at: clock::wall_clock(),
        }
    }
}
