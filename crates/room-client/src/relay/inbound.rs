//! Inbound relay: bus -> display
//!
//! Consumes raw payloads from the subscription, decodes them, filters
//! out the local participant's own echoes, and forwards the rest as chat
//! notices. Malformed payloads are logged and dropped; a peer sending
//! garbage must not end the session.

use tokio::sync::mpsc;

use room_core::{ChatMessage, ShutdownSignal};

use crate::notice::Notice;

/// Decode a payload and decide whether it should be displayed
///
/// Returns `Ok(None)` for the local participant's own messages (fanout
/// delivers them back to every queue, including ours).
pub fn screen(payload: &[u8], self_id: i64) -> Result<Option<Notice>, serde_json::Error> {
    let message: ChatMessage = serde_json::from_slice(payload)?;

    if message.sender_id == self_id {
        return Ok(None);
    }

    Ok(Some(Notice::chat(message)))
}

/// Run the inbound relay until shutdown or the subscription closes
pub async fn run(
    mut payloads: mpsc::UnboundedReceiver<Vec<u8>>,
    self_id: i64,
    notices: mpsc::UnboundedSender<Notice>,
    shutdown: ShutdownSignal,
) {
    loop {
        tokio::select! {
            () = shutdown.triggered() => break,

            payload = payloads.recv() => {
                let Some(payload) = payload else { break };

                match screen(&payload, self_id) {
                    Ok(Some(notice)) => {
                        let _ = notices.send(notice);
                    }
                    Ok(None) => {
                        tracing::trace!("Suppressed own message");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Discarding malformed payload");
                    }
                }
            }
        }
    }

    tracing::debug!("Inbound relay stopped");
}
