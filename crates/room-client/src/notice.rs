//! User-facing room notices
//!
//! Every component reports what happened through a notice channel; only
//! the display task touches the terminal. Tests capture the receiver
//! instead of parsing stdout.

use std::fmt;

use tokio::sync::mpsc;

use room_core::{clock, ChatMessage};

/// Something worth showing the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A remote peer appeared in the directory listing
    PeerOnline { name: String, at: String },

    /// A tracked peer disappeared from the listing (or the room shut down)
    PeerExited { name: String, at: String },

    /// The last tracked peer left; emitted once per transition
    RoomEmpty,

    /// A chat line from a remote peer, stamped with its send-side clock
    Chat {
        sender: String,
        text: String,
        at: String,
    },
}

impl Notice {
    /// Online notice for a peer, stamped now
    #[must_use]
    pub fn peer_online(name: impl Into<String>) -> Self {
        Self::PeerOnline {
            name: name.into(),
            at: clock::wall_clock(),
        }
    }

    /// Exit notice for a peer, stamped now
    #[must_use]
    pub fn peer_exited(name: impl Into<String>) -> Self {
        Self::PeerExited {
            name: name.into(),
            at: clock::wall_clock(),
        }
    }

    /// Chat notice carrying the sender's own timestamp
    #[must_use]
    pub fn chat(message: ChatMessage) -> Self {
        Self::Chat {
            sender: message.sender_name,
            text: message.text,
            at: message.sent_at,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerOnline { name, at } => write!(f, "{at} [{name}] is online"),
            Self::PeerExited { name, at } => write!(f, "{at} [{name}] exited"),
            Self::RoomEmpty => write!(f, "Room is empty"),
            Self::Chat { sender, text, at } => write!(f, "{at} [{sender}]: {text}"),
        }
    }
}

/// Print notices until every sender is gone
pub async fn display_loop(mut notices: mpsc::UnboundedReceiver<Notice>) {
    while let Some(notice) = notices.recv().await {
        println!("{notice}");
    }
}
