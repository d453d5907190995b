use async_trait::async_trait;
use tracing::info;

use super::model::{Job, JobSpec, JobState};
use crate::common::error::WorkflowError;

#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn create_job(&self, spec: &JobSpec) -> Result<Job, WorkflowError>;
    async fn job_state(&self, job_id: &str) -> Result<JobState, WorkflowError>;
}

/// Submits one transcode request. Fire-and-forget: the returned job carries
/// the provider-assigned id and initial state, nothing more.
pub async fn submit(jobs: &dyn JobProvider, spec: &JobSpec) -> Result<Job, WorkflowError> {
    if spec.outputs.is_empty() {
        return Err(WorkflowError::Submission {
            pipeline_id: spec.pipeline_id.clone(),
            detail: "outputs must not be empty".to_string(),
        });
    }
    let job = jobs.create_job(spec).await?;
    info!("job={}", serde_json::to_string(&job).unwrap_or_default());
    info!("✅ Submitted job id={} state={}", job.id, job.state);
    Ok(job)
}
