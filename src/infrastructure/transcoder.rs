use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_elastictranscoder::Client;
use aws_sdk_elastictranscoder::error::DisplayErrorContext;
use aws_sdk_elastictranscoder::types::{CreateJobOutput, JobInput, Notifications};
use tracing::warn;

use crate::common::error::{ResourceKind, WorkflowError};
use crate::modules::job::model::{Job, JobSpec, JobState};
use crate::modules::job::service::JobProvider;
use crate::modules::pipeline::model::{Pipeline, PipelineSpec};
use crate::modules::pipeline::service::PipelineProvider;

#[derive(Clone)]
pub struct TranscoderService {
    client: Client,
}

impl TranscoderService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl PipelineProvider for TranscoderService {
    async fn create_pipeline(&self, spec: &PipelineSpec) -> Result<Pipeline, WorkflowError> {
        let mut req = self
            .client
            .create_pipeline()
            .name(&spec.name)
            .input_bucket(&spec.input_bucket)
            .output_bucket(&spec.output_bucket)
            .role(&spec.role_arn);

        if !spec.notifications.is_empty() {
            // Event classes without a topic are wired as the empty string,
            // which the API reads as "send nothing".
            let n = &spec.notifications;
            req = req.notifications(
                Notifications::builder()
                    .progressing(n.progressing.clone().unwrap_or_default())
                    .completed(n.completed.clone().unwrap_or_default())
                    .warning(n.warning.clone().unwrap_or_default())
                    .error(n.error.clone().unwrap_or_default())
                    .build(),
            );
        }

        let out = req.send().await.map_err(|e| WorkflowError::Provisioning {
            name: spec.name.clone(),
            detail: format!("{}", DisplayErrorContext(&e)),
        })?;

        let pipeline = out
            .pipeline()
            .ok_or_else(|| WorkflowError::Provisioning {
                name: spec.name.clone(),
                detail: "response carried no pipeline".to_string(),
            })?;

        Ok(Pipeline {
            id: pipeline.id().unwrap_or_default().to_string(),
            arn: pipeline.arn().unwrap_or_default().to_string(),
            name: spec.name.clone(),
            input_bucket: spec.input_bucket.clone(),
            output_bucket: spec.output_bucket.clone(),
            role_arn: spec.role_arn.clone(),
        })
    }
}

#[async_trait]
impl JobProvider for TranscoderService {
    async fn create_job(&self, spec: &JobSpec) -> Result<Job, WorkflowError> {
        let input = JobInput::builder()
            .key(&spec.input_key)
            .frame_rate(&spec.hints.frame_rate)
            .resolution(&spec.hints.resolution)
            .aspect_ratio(&spec.hints.aspect_ratio)
            .interlaced(&spec.hints.interlaced)
            .container(&spec.hints.container)
            .build();

        let mut req = self
            .client
            .create_job()
            .pipeline_id(&spec.pipeline_id)
            .input(input);

        for output in &spec.outputs {
            let mut builder = CreateJobOutput::builder()
                .key(&output.key)
                .preset_id(&output.preset_id);
            if let Some(duration) = &output.segment_duration {
                builder = builder.segment_duration(duration);
            }
            req = req.outputs(builder.build());
        }

        let out = req.send().await.map_err(|e| WorkflowError::Submission {
            pipeline_id: spec.pipeline_id.clone(),
            detail: format!("{}", DisplayErrorContext(&e)),
        })?;

        let job = out.job().ok_or_else(|| WorkflowError::Submission {
            pipeline_id: spec.pipeline_id.clone(),
            detail: "response carried no job".to_string(),
        })?;

        Ok(Job {
            id: job.id().unwrap_or_default().to_string(),
            state: job
                .status()
                .and_then(JobState::from_provider)
                .unwrap_or(JobState::Submitted),
        })
    }

    async fn job_state(&self, job_id: &str) -> Result<JobState, WorkflowError> {
        let out = self
            .client
            .read_job()
            .id(job_id)
            .send()
            .await
            .map_err(|e| WorkflowError::ResourceNotFound {
                kind: ResourceKind::Job,
                name: job_id.to_string(),
                detail: format!("{}", DisplayErrorContext(&e)),
            })?;

        let status = out.job().and_then(|j| j.status());
        match status.and_then(JobState::from_provider) {
            Some(state) => Ok(state),
            None => {
                // An unrecognized status keeps the waiter polling.
                warn!("Job {} reported unknown status {:?}", job_id, status);
                Ok(JobState::Progressing)
            }
        }
    }
}
