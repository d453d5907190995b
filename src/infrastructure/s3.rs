use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;

use crate::common::error::{ResourceKind, WorkflowError};
use crate::modules::preflight::service::BucketChecker;

#[derive(Clone)]
pub struct StorageService {
    client: Client,
}

impl StorageService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl BucketChecker for StorageService {
    async fn head_bucket(&self, name: &str) -> Result<(), WorkflowError> {
        self.client
            .head_bucket()
            .bucket(name)
            .send()
            .await
            .map_err(|e| WorkflowError::ResourceNotFound {
                kind: ResourceKind::Bucket,
                name: name.to_string(),
                detail: format!("{}", DisplayErrorContext(&e)),
            })?;
        Ok(())
    }
}
