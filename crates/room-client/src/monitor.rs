//! Per-peer lifecycle monitor
//!
//! One monitor per remote participant currently listed online. The state
//! machine is `Online -> Exited`: an online notice exactly once at spawn,
//! then the task sleeps on its own cancellation token until the poller
//! (or shutdown teardown) cancels it, at which point it emits the exit
//! notice and terminates. The token is private to the handle, so nothing
//! but the poller can cancel a monitor.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::notice::Notice;

/// Cancellation handle for a running peer monitor
///
/// Cancelling is idempotent: the token can be cancelled any number of
/// times, and the monitor body emits its exit notice exactly once.
#[derive(Debug)]
pub struct MonitorHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Request the monitor to exit; safe to call repeatedly
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel and wait for the exit notice to have been emitted
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "Peer monitor ended abnormally");
        }
    }
}

/// Spawns lifecycle monitors for remote peers
pub struct PeerMonitor;

impl PeerMonitor {
    /// Start monitoring a peer
    ///
    /// Emits the online notice before the task is spawned, so notice
    /// order is deterministic with respect to the caller.
    pub fn spawn(name: impl Into<String>, notices: &mpsc::UnboundedSender<Notice>) -> MonitorHandle {
        let name = name.into();
        let token = CancellationToken::new();

        let _ = notices.send(Notice::peer_online(&name));
        tracing::debug!(peer = %name, "Started monitoring peer");

        let task = {
            let token = token.clone();
            let notices = notices.clone();
            tokio::spawn(async move {
                token.cancelled().await;
                let _ = notices.send(Notice::peer_exited(&name));
                tracing::debug!(peer = %name, "Stopped monitoring peer");
            })
        };

        MonitorHandle { token, task }
    }
}
