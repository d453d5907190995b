use std::time::Duration;

use crate::config::env::{self, EnvKey};
use crate::modules::job::model::WarningPolicy;

/// Parameters for the transcode workflow. Every field has a default so the
/// binary runs without any environment set up, matching the sample pipeline
/// the defaults describe.
#[derive(Clone, Debug)]
pub struct TranscodeConfig {
    pub region: String,
    pub role_name: String,
    pub pipeline_name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub input_key: String,
    pub preset_id: String,
    pub segment_duration: String,
    /// When set, the pipeline's Completed event class is wired to this
    /// SNS topic (resolved or created by name). The other event classes
    /// stay silent.
    pub completed_topic: Option<String>,
    pub poll_interval: Duration,
    pub wait_timeout: Option<Duration>,
    pub warning_policy: WarningPolicy,
}

impl TranscodeConfig {
    pub fn from_env() -> Self {
        let timeout_secs: u64 = env::get_parsed(EnvKey::WaitTimeoutSecs, 0);
        Self {
            region: env::get_or(EnvKey::Region, "ap-northeast-1"),
            role_name: env::get_or(EnvKey::RoleName, "Elastic_Transcoder_Default_Role"),
            pipeline_name: env::get_or(EnvKey::PipelineName, "HLS Transcoder"),
            input_bucket: env::get_or(EnvKey::InputBucket, "boto3-transcoder-in"),
            output_bucket: env::get_or(EnvKey::OutputBucket, "boto3-transcoder-out"),
            input_key: env::get_or(EnvKey::InputKey, "D0002022073_00000/sample.mp4"),
            // System preset: HLS 1M
            preset_id: env::get_or(EnvKey::PresetId, "1351620000001-200030"),
            segment_duration: env::get_or(EnvKey::SegmentDuration, "10"),
            completed_topic: env::get_opt(EnvKey::CompletedTopic),
            poll_interval: Duration::from_secs(env::get_parsed(EnvKey::PollIntervalSecs, 30)),
            // 0 means wait forever
            wait_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            warning_policy: env::get_parsed(EnvKey::WarningPolicy, WarningPolicy::TreatAsFailure),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NotifyConfig {
    pub region: String,
    pub topic_name: String,
    pub subject: String,
    pub message: String,
}

impl NotifyConfig {
    pub fn from_env() -> Self {
        Self {
            region: env::get_or(EnvKey::Region, "ap-northeast-1"),
            topic_name: env::get_or(EnvKey::TopicName, "test-complete"),
            subject: env::get_or(EnvKey::NotifySubject, "test"),
            message: env::get_or(EnvKey::NotifyMessage, "This is a message."),
        }
    }
}
