use async_trait::async_trait;

use crate::errors::InsightResult;
use crate::models::OutboundMessage;

/// Delivers messages to a chat group.
#[async_trait]
pub trait IMessageSink: Send + Sync {
    async fn send(&self, group_id: &str, message: OutboundMessage) -> InsightResult<()>;
}
