//! Outbound relay: local input -> bus
//!
//! Consumes lines from the input channel, wraps each non-empty one in a
//! wire message, and publishes it. Failures drop the affected line only;
//! a flaky broker must not end the session.

use std::sync::Arc;

use tokio::sync::mpsc;

use room_core::{ChatMessage, Identity, MessagePublisher, ShutdownSignal};

/// Input line that ends the session instead of being published
pub const LOGOUT_COMMAND: &str = "/quit";

/// Run the outbound relay until shutdown, logout, or input EOF
pub async fn run(
    mut lines: mpsc::UnboundedReceiver<String>,
    identity: Identity,
    publisher: Arc<dyn MessagePublisher>,
    shutdown: ShutdownSignal,
) {
    loop {
        tokio::select! {
            () = shutdown.triggered() => break,

            line = lines.recv() => {
                let Some(line) = line else { break };

                if line.is_empty() {
                    continue;
                }

                if line == LOGOUT_COMMAND {
                    shutdown.trigger();
                    break;
                }

                let message = ChatMessage::compose(&identity, line);
                let payload = match serde_json::to_vec(&message) {
                    Ok(payload) => payload,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to encode message, dropping line");
                        continue;
                    }
                };

                if let Err(e) = publisher.publish(&payload).await {
                    tracing::warn!(error = %e, "Failed to publish message, dropping line");
                }
            }
        }
    }

    tracing::debug!("Outbound relay stopped");
}
