use std::fmt;
use std::time::Duration;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Role,
    Bucket,
    Job,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Role => write!(f, "role"),
            ResourceKind::Bucket => write!(f, "bucket"),
            ResourceKind::Job => write!(f, "job"),
        }
    }
}

/// Every failure is fatal to the current run: no retries, no recovery.
/// The provider's diagnostic payload is carried in `detail` so the exit
/// message names exactly what was rejected.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{kind} not found: {name} ({detail})")]
    ResourceNotFound {
        kind: ResourceKind,
        name: String,
        detail: String,
    },

    #[error("failed to create pipeline '{name}': {detail}")]
    Provisioning { name: String, detail: String },

    #[error("failed to submit job to pipeline '{pipeline_id}': {detail}")]
    Submission { pipeline_id: String, detail: String },

    #[error("timed out after {waited:?} waiting for job {job_id}")]
    Timeout { job_id: String, waited: Duration },

    #[error("failed to publish to topic '{topic}': {detail}")]
    Publish { topic: String, detail: String },
}

impl WorkflowError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkflowError::ResourceNotFound { .. })
    }
}
