//! Bus connection lifecycle
//!
//! Owns the AMQP connection and channel. The connection is opened once at
//! startup (failure is fatal to the session) and closed exactly once,
//! after every task using the channel has stopped.

use lapin::options::ExchangeDeclareOptions;
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties, ExchangeKind};

use room_core::{BusError, BusResult, ShutdownSignal};

use crate::publisher::BusPublisher;
use crate::subscriber::{self, Subscription};

/// An open connection to the message bus with the room exchange declared
pub struct BusConnection {
    connection: Connection,
    channel: Channel,
    exchange: String,
}

impl BusConnection {
    /// Connect to the broker and declare the durable fanout exchange
    ///
    /// # Errors
    /// Returns `BusError::Connection` if the broker is unreachable and
    /// `BusError::Topology` if the exchange cannot be declared.
    pub async fn connect(url: &str, exchange: &str) -> BusResult<Self> {
        let connection = Connection::connect(url, ConnectionProperties::default())
            .await
            .map_err(|e| BusError::Connection(e.to_string()))?;

        let channel = connection
            .create_channel()
            .await
            .map_err(|e| BusError::Connection(e.to_string()))?;

        channel
            .exchange_declare(
                exchange,
                ExchangeKind::Fanout,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| BusError::Topology(e.to_string()))?;

        tracing::info!(exchange = %exchange, "Connected to message bus");

        Ok(Self {
            connection,
            channel,
            exchange: exchange.to_string(),
        })
    }

    /// Publish handle for the room exchange
    #[must_use]
    pub fn publisher(&self) -> BusPublisher {
        BusPublisher::new(self.channel.clone(), self.exchange.clone())
    }

    /// Bind a fresh exclusive queue and start consuming into a channel
    ///
    /// The returned [`Subscription`] carries the payload receiver and the
    /// consumer task, which runs until the shutdown signal fires.
    pub async fn subscribe(&self, shutdown: &ShutdownSignal) -> BusResult<Subscription> {
        subscriber::subscribe(&self.channel, &self.exchange, shutdown).await
    }

    /// Close the connection
    ///
    /// Consumes the handle so it can only happen once. Close failures are
    /// logged; the process is exiting either way.
    pub async fn close(self) {
        if let Err(e) = self.connection.close(200, "client shutdown").await {
            tracing::warn!(error = %e, "Failed to close bus connection cleanly");
        }
    }
}

impl std::fmt::Debug for BusConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusConnection")
            .field("exchange", &self.exchange)
            .finish()
    }
}
