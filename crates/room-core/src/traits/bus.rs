//! Message bus publish port

use async_trait::async_trait;

use crate::error::BusError;

/// Result type for bus operations
pub type BusResult<T> = Result<T, BusError>;

/// Publish side of the fanout topic
///
/// Delivery is best-effort; a failed publish affects only the payload it
/// carried.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Publish one serialized message to the room topic
    async fn publish(&self, payload: &[u8]) -> BusResult<()>;
}
