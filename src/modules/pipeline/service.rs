use async_trait::async_trait;
use tracing::info;

use super::model::{Pipeline, PipelineSpec};
use crate::common::error::WorkflowError;

#[async_trait]
pub trait PipelineProvider: Send + Sync {
    async fn create_pipeline(&self, spec: &PipelineSpec) -> Result<Pipeline, WorkflowError>;
}

/// Creates the pipeline. NOT idempotent: the provider does not deduplicate
/// by name, so running this twice with the same spec creates two pipelines.
pub async fn provision(
    pipelines: &dyn PipelineProvider,
    spec: &PipelineSpec,
) -> Result<Pipeline, WorkflowError> {
    let pipeline = pipelines.create_pipeline(spec).await?;
    info!("response={}", serde_json::to_string(&pipeline).unwrap_or_default());
    info!("✅ Created pipeline '{}' id={}", pipeline.name, pipeline.id);
    Ok(pipeline)
}
