//! Publish side of the room exchange

use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::{BasicProperties, Channel};

use room_core::{BusError, BusResult, MessagePublisher};

/// Publishes serialized messages to the fanout exchange
///
/// Cheap to clone into the outbound relay task; shares the channel with
/// the consumer without owning the connection.
#[derive(Clone)]
pub struct BusPublisher {
    channel: Channel,
    exchange: String,
}

impl BusPublisher {
    /// Create a publisher for the given channel and exchange
    #[must_use]
    pub fn new(channel: Channel, exchange: String) -> Self {
        Self { channel, exchange }
    }
}

#[async_trait]
impl MessagePublisher for BusPublisher {
    async fn publish(&self, payload: &[u8]) -> BusResult<()> {
        self.channel
            .basic_publish(
                &self.exchange,
                "",
                BasicPublishOptions::default(),
                payload,
                BasicProperties::default().with_content_type("application/json".into()),
            )
            .await
            .map_err(|e| BusError::Publish(e.to_string()))?
            .await
            .map_err(|e| BusError::Publish(e.to_string()))?;

        Ok(())
    }
}

impl std::fmt::Debug for BusPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusPublisher")
            .field("exchange", &self.exchange)
            .finish()
    }
}
