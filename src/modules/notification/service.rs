use async_trait::async_trait;
use tracing::info;

use super::model::{PublishReceipt, Topic};
use crate::common::error::WorkflowError;

#[async_trait]
pub trait TopicProvider: Send + Sync {
    /// Idempotent on the provider side: the same name always resolves to
    /// the same topic, creating it only if it does not exist yet.
    async fn resolve_or_create_topic(&self, name: &str) -> Result<Topic, WorkflowError>;

    async fn publish(
        &self,
        topic: &Topic,
        subject: &str,
        message: &str,
    ) -> Result<PublishReceipt, WorkflowError>;
}

pub async fn resolve_or_create(
    topics: &dyn TopicProvider,
    name: &str,
) -> Result<Topic, WorkflowError> {
    let topic = topics.resolve_or_create_topic(name).await?;
    info!("topic_arn={}", topic.arn);
    Ok(topic)
}

pub async fn publish_message(
    topics: &dyn TopicProvider,
    topic: &Topic,
    subject: &str,
    message: &str,
) -> Result<PublishReceipt, WorkflowError> {
    let receipt = topics.publish(topic, subject, message).await?;
    info!("✅ Published to '{}' message_id={}", topic.name, receipt.message_id);
    Ok(receipt)
}
