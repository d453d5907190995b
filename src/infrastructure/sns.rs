use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;

use crate::common::error::WorkflowError;
use crate::modules::notification::model::{PublishReceipt, Topic};
use crate::modules::notification::service::TopicProvider;

#[derive(Clone)]
pub struct NotificationService {
    client: Client,
}

impl NotificationService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TopicProvider for NotificationService {
    async fn resolve_or_create_topic(&self, name: &str) -> Result<Topic, WorkflowError> {
        // CreateTopic is idempotent on the SNS side: an existing topic's
        // ARN is returned without creating a duplicate.
        let out = self
            .client
            .create_topic()
            .name(name)
            .send()
            .await
            .map_err(|e| WorkflowError::Publish {
                topic: name.to_string(),
                detail: format!("{}", DisplayErrorContext(&e)),
            })?;

        let arn = out.topic_arn().ok_or_else(|| WorkflowError::Publish {
            topic: name.to_string(),
            detail: "response carried no topic arn".to_string(),
        })?;

        Ok(Topic {
            name: name.to_string(),
            arn: arn.to_string(),
        })
    }

    async fn publish(
        &self,
        topic: &Topic,
        subject: &str,
        message: &str,
    ) -> Result<PublishReceipt, WorkflowError> {
        let out = self
            .client
            .publish()
            .topic_arn(&topic.arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| WorkflowError::Publish {
                topic: topic.name.clone(),
                detail: format!("{}", DisplayErrorContext(&e)),
            })?;

        Ok(PublishReceipt {
            message_id: out.message_id().unwrap_or_default().to_string(),
        })
    }
}
