//! Room lifecycle orchestration
//!
//! The manager owns the session identity and the shutdown path; the
//! handle owns everything that runs. Startup is fail-fast: if
//! registration or the bus connection fails, no task ever starts.
//! Shutdown is guarded so the interrupt handler and the logout command
//! can race without a double teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use room_bus::{BusConnection, Subscription};
use room_common::AppConfig;
use room_core::{
    DirectoryResult, DisplayName, Identity, MessagePublisher, PresenceDirectory, ShutdownSignal,
};

use crate::notice;
use crate::poller::PresencePoller;
use crate::relay;

/// Top-level orchestrator for one participant's session
pub struct RoomManager {
    identity: Identity,
    directory: Arc<dyn PresenceDirectory>,
    shutdown: ShutdownSignal,
    stopped: AtomicBool,
}

impl RoomManager {
    /// Register with the presence directory and build the manager
    ///
    /// # Errors
    /// Registration failure is fatal: without an identity there is no
    /// session to run.
    pub async fn login(
        name: DisplayName,
        directory: Arc<dyn PresenceDirectory>,
    ) -> DirectoryResult<Self> {
        let id = directory.register(&name).await?;
        let identity = Identity::new(id, name);

        tracing::info!(
            id = identity.id(),
            name = %identity.name(),
            "Registered with presence directory"
        );

        Ok(Self {
            identity,
            directory,
            shutdown: ShutdownSignal::new(),
            stopped: AtomicBool::new(false),
        })
    }

    /// The registered session identity
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// A clone of the session's shutdown signal
    ///
    /// Lets the embedding CLI observe a logout initiated from inside the
    /// room (the `/quit` command) alongside its own interrupt handling.
    #[must_use]
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Connect the bus and launch every session task
    ///
    /// `input` carries the user's chat lines. The returned handle owns
    /// the running tasks; the caller decides whether to await it.
    ///
    /// # Errors
    /// Bus connection or subscription failure is fatal; no partial
    /// session is left behind.
    pub async fn start(
        &self,
        config: &AppConfig,
        input: mpsc::UnboundedReceiver<String>,
    ) -> room_core::BusResult<RoomHandle> {
        let bus = BusConnection::connect(&config.bus.url(), &config.room.exchange).await?;
        let Subscription {
            payloads,
            task: consumer,
        } = bus.subscribe(&self.shutdown).await?;

        let (notice_tx, notice_rx) = mpsc::unbounded_channel();
        let display = tokio::spawn(notice::display_loop(notice_rx));

        let inbound = tokio::spawn(relay::inbound::run(
            payloads,
            self.identity.id(),
            notice_tx.clone(),
            self.shutdown.clone(),
        ));

        let publisher: Arc<dyn MessagePublisher> = Arc::new(bus.publisher());
        let outbound = tokio::spawn(relay::outbound::run(
            input,
            self.identity.clone(),
            publisher,
            self.shutdown.clone(),
        ));

        let poller = PresencePoller::new(
            self.directory.clone(),
            self.identity.id(),
            config.room.poll_interval,
            self.shutdown.clone(),
            notice_tx,
        );
        let poller = tokio::spawn(poller.run());

        tracing::info!("Room session started");

        Ok(RoomHandle {
            bus,
            consumer,
            inbound,
            outbound,
            poller,
            display,
        })
    }

    /// Trigger shutdown and mark the participant offline
    ///
    /// Only the first invocation does work; the interrupt handler and
    /// the explicit logout path may both call this. Marking offline is
    /// best-effort: the process is exiting regardless.
    pub async fn shutdown(&self) {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return;
        }

        self.shutdown.trigger();

        match self.directory.mark_offline(self.identity.id()).await {
            Ok(()) => tracing::info!("Marked offline in presence directory"),
            Err(e) => tracing::warn!(error = %e, "Failed to mark self offline"),
        }
    }
}

impl std::fmt::Debug for RoomManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomManager")
            .field("identity", &self.identity)
            .field("stopped", &self.stopped)
            .finish()
    }
}

/// Owns the running session tasks and the bus connection
pub struct RoomHandle {
    bus: BusConnection,
    consumer: JoinHandle<()>,
    inbound: JoinHandle<()>,
    outbound: JoinHandle<()>,
    poller: JoinHandle<()>,
    display: JoinHandle<()>,
}

impl RoomHandle {
    /// Wait for every task to observe shutdown, then close the bus
    ///
    /// The connection is closed exactly once, after the relays and the
    /// poller have stopped using it.
    pub async fn join(self) {
        let tasks = [
            ("poller", self.poller),
            ("inbound relay", self.inbound),
            ("outbound relay", self.outbound),
            ("bus consumer", self.consumer),
        ];

        for (name, task) in tasks {
            if let Err(e) = task.await {
                tracing::warn!(task = name, error = %e, "Task ended abnormally");
            }
        }

        // Display drains once every notice sender above is gone
        if let Err(e) = self.display.await {
            tracing::warn!(task = "display", error = %e, "Task ended abnormally");
        }

        self.bus.close().await;
        tracing::info!("Room session closed");
    }
}
