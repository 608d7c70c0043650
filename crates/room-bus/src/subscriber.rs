//! Consume side of the room exchange
//!
//! Declares an exclusive, auto-delete, server-named queue bound to the
//! exchange with no routing key (every participant receives every
//! message) and forwards raw delivery payloads into an in-process
//! channel. The consumer task is the only code that touches the broker
//! stream; the relay never sees AMQP types.

use futures_util::StreamExt;
use lapin::options::{BasicConsumeOptions, QueueBindOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::Channel;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use room_core::{BusError, BusResult, ShutdownSignal};

/// A live subscription to the room topic
pub struct Subscription {
    /// Raw message payloads in arrival order
    pub payloads: mpsc::UnboundedReceiver<Vec<u8>>,
    /// The consumer task; exits when the shutdown signal fires
    pub task: JoinHandle<()>,
}

/// Bind a fresh queue and start the consumer task
pub(crate) async fn subscribe(
    channel: &Channel,
    exchange: &str,
    shutdown: &ShutdownSignal,
) -> BusResult<Subscription> {
    let queue = channel
        .queue_declare(
            "",
            QueueDeclareOptions {
                exclusive: true,
                auto_delete: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await
        .map_err(|e| BusError::Subscribe(e.to_string()))?;

    channel
        .queue_bind(
            queue.name().as_str(),
            exchange,
            "",
            QueueBindOptions::default(),
            FieldTable::default(),
        )
        .await
        .map_err(|e| BusError::Subscribe(e.to_string()))?;

    let mut consumer = channel
        .basic_consume(
            queue.name().as_str(),
            "",
            BasicConsumeOptions {
                no_ack: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await
        .map_err(|e| BusError::Subscribe(e.to_string()))?;

    tracing::debug!(queue = %queue.name().as_str(), exchange = %exchange, "Subscribed to room topic");

    let (tx, rx) = mpsc::unbounded_channel();
    let shutdown = shutdown.clone();

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                () = shutdown.triggered() => break,

                delivery = consumer.next() => match delivery {
                    Some(Ok(delivery)) => {
                        // Receiver gone means the inbound relay stopped first
                        if tx.send(delivery.data).is_err() {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Bus delivery error, stopping consumer");
                        break;
                    }
                    None => {
                        tracing::warn!("Bus consumer stream ended");
                        break;
                    }
                },
            }
        }

        tracing::debug!("Bus consumer task stopped");
    });

    Ok(Subscription { payloads: rx, task })
}
