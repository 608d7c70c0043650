//! Presence reconciliation
//!
//! A fixed-interval loop that compares the directory's listing against
//! the locally tracked peers and spawns or cancels monitors to close the
//! gap. The peer map lives inside the poller, so it has exactly one
//! writer by construction; every other component learns about membership
//! through notices.
//!
//! Join/leave detection latency is bounded by the poll interval. The
//! directory offers no change notifications, so polling is the contract.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use room_core::{PresenceDirectory, ShutdownSignal};

use crate::monitor::{MonitorHandle, PeerMonitor};
use crate::notice::Notice;

/// Outcome of comparing a directory listing with the tracked peers
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PeerDiff {
    /// Listed but not yet tracked
    pub joined: Vec<String>,
    /// Tracked but no longer listed
    pub departed: Vec<String>,
}

impl PeerDiff {
    /// True when the listing and the tracked set already agree
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty() && self.departed.is_empty()
    }
}

/// Set difference in both directions
#[must_use]
pub fn diff_peers(listing: &HashSet<String>, tracked: &HashSet<String>) -> PeerDiff {
    PeerDiff {
        joined: listing.difference(tracked).cloned().collect(),
        departed: tracked.difference(listing).cloned().collect(),
    }
}

/// Periodically reconciles tracked peers against the presence directory
pub struct PresencePoller {
    directory: Arc<dyn PresenceDirectory>,
    self_id: i64,
    poll_interval: Duration,
    shutdown: ShutdownSignal,
    notices: mpsc::UnboundedSender<Notice>,
    peers: HashMap<String, MonitorHandle>,
    room_empty: bool,
}

impl PresencePoller {
    /// Create a poller for the given identity
    #[must_use]
    pub fn new(
        directory: Arc<dyn PresenceDirectory>,
        self_id: i64,
        poll_interval: Duration,
        shutdown: ShutdownSignal,
        notices: mpsc::UnboundedSender<Notice>,
    ) -> Self {
        Self {
            directory,
            self_id,
            poll_interval,
            shutdown,
            notices,
            peers: HashMap::new(),
            room_empty: false,
        }
    }

    /// Names currently tracked by a live monitor
    #[must_use]
    pub fn tracked(&self) -> HashSet<String> {
        self.peers.keys().cloned().collect()
    }

    /// Run until the shutdown signal fires, then tear down every monitor
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.poll_interval);

        loop {
            tokio::select! {
                () = self.shutdown.triggered() => break,
                _ = ticker.tick() => self.poll_once().await,
            }
        }

        self.drain().await;
        tracing::debug!("Presence poller stopped");
    }

    /// Run a single reconciliation pass
    ///
    /// A directory failure skips the tick without touching poller state;
    /// a transient outage must not look like everyone leaving at once.
    pub async fn poll_once(&mut self) {
        match self.directory.list_online(self.self_id).await {
            Ok(listing) => self.apply_listing(listing).await,
            Err(e) => {
                tracing::warn!(error = %e, "Presence poll failed, skipping tick");
            }
        }
    }

    async fn apply_listing(&mut self, listing: HashSet<String>) {
        let tracked = self.tracked();
        let diff = diff_peers(&listing, &tracked);

        for name in diff.joined {
            let handle = PeerMonitor::spawn(name.clone(), &self.notices);
            self.peers.insert(name, handle);
        }

        for name in diff.departed {
            if let Some(handle) = self.peers.remove(&name) {
                handle.stop().await;
            }
        }

        // Edge-triggered: announce emptiness once per transition, counting
        // the very first empty tick as a transition
        if self.peers.is_empty() {
            if !self.room_empty {
                let _ = self.notices.send(Notice::RoomEmpty);
                self.room_empty = true;
            }
        } else {
            self.room_empty = false;
        }
    }

    /// Cancel every remaining monitor and wait for their exit notices
    async fn drain(&mut self) {
        for (_, handle) in self.peers.drain() {
            handle.stop().await;
        }
    }
}
