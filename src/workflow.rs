use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::common::error::WorkflowError;
use crate::config::settings::{NotifyConfig, TranscodeConfig};
use crate::modules::job::model::{FormatHints, JobSpec, JobState, OutputSpec, rendition_key};
use crate::modules::job::service::{self as job_service, JobProvider};
use crate::modules::job::waiter::{self, WaitOptions};
use crate::modules::notification::model::PublishReceipt;
use crate::modules::notification::service::{self as notification_service, TopicProvider};
use crate::modules::pipeline::model::{NotificationMap, Pipeline, PipelineSpec};
use crate::modules::pipeline::service::{self as pipeline_service, PipelineProvider};
use crate::modules::preflight::service::{self as preflight, BucketChecker, RoleChecker};

const RENDITION_PREFIX: &str = "HLS/1M";

#[derive(Clone, Debug)]
pub struct TranscodeOutcome {
    pub pipeline: Pipeline,
    pub job_id: String,
    pub state: JobState,
}

/// The whole transcode workflow, top to bottom: preflight the role and
/// buckets, resolve the completion topic if one is configured, provision
/// the pipeline, submit the job, block until it is terminal.
pub async fn run_transcode(
    config: &TranscodeConfig,
    roles: &dyn RoleChecker,
    buckets: &dyn BucketChecker,
    pipelines: &dyn PipelineProvider,
    jobs: &dyn JobProvider,
    topics: &dyn TopicProvider,
    cancel: &CancellationToken,
) -> Result<TranscodeOutcome, WorkflowError> {
    let role = preflight::run_preflight(
        roles,
        buckets,
        &config.role_name,
        &config.input_bucket,
        &config.output_bucket,
    )
    .await?;

    let notifications = match &config.completed_topic {
        Some(topic_name) => {
            let topic = notification_service::resolve_or_create(topics, topic_name).await?;
            NotificationMap::completed_only(topic.arn)
        }
        None => NotificationMap::default(),
    };

    let pipeline = pipeline_service::provision(
        pipelines,
        &PipelineSpec {
            name: config.pipeline_name.clone(),
            input_bucket: config.input_bucket.clone(),
            output_bucket: config.output_bucket.clone(),
            role_arn: role.arn,
            notifications,
        },
    )
    .await?;

    let job = job_service::submit(
        jobs,
        &JobSpec {
            pipeline_id: pipeline.id.clone(),
            input_key: config.input_key.clone(),
            hints: FormatHints::auto(),
            outputs: vec![OutputSpec {
                key: rendition_key(RENDITION_PREFIX, &config.input_key),
                preset_id: config.preset_id.clone(),
                segment_duration: Some(config.segment_duration.clone()),
            }],
        },
    )
    .await?;

    info!("Waiting for job {} (poll every {:?})", job.id, config.poll_interval);
    let state = waiter::await_completion(
        jobs,
        &job.id,
        &WaitOptions {
            poll_interval: config.poll_interval,
            timeout: config.wait_timeout,
        },
        cancel,
    )
    .await?;

    Ok(TranscodeOutcome {
        pipeline,
        job_id: job.id,
        state,
    })
}

/// The standalone notification workflow: resolve (or create) the topic,
/// publish one message, done.
pub async fn run_notify(
    config: &NotifyConfig,
    topics: &dyn TopicProvider,
) -> Result<PublishReceipt, WorkflowError> {
    let topic = notification_service::resolve_or_create(topics, &config.topic_name).await?;
    notification_service::publish_message(topics, &topic, &config.subject, &config.message).await
}
