use std::env;
use std::str::FromStr;

pub enum EnvKey {
    Region,
    RoleName,
    PipelineName,
    InputBucket,
    OutputBucket,
    InputKey,
    PresetId,
    SegmentDuration,
    CompletedTopic,
    TopicName,
    NotifySubject,
    NotifyMessage,
    PollIntervalSecs,
    WaitTimeoutSecs,
    WarningPolicy,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::Region => "TRANSCODER_REGION",
            EnvKey::RoleName => "TRANSCODER_ROLE_NAME",
            EnvKey::PipelineName => "TRANSCODER_PIPELINE_NAME",
            EnvKey::InputBucket => "TRANSCODER_IN_BUCKET",
            EnvKey::OutputBucket => "TRANSCODER_OUT_BUCKET",
            EnvKey::InputKey => "TRANSCODER_INPUT_KEY",
            EnvKey::PresetId => "TRANSCODER_PRESET_ID",
            EnvKey::SegmentDuration => "TRANSCODER_SEGMENT_DURATION",
            EnvKey::CompletedTopic => "TRANSCODER_COMPLETED_TOPIC",
            EnvKey::TopicName => "SNS_TOPIC_NAME",
            EnvKey::NotifySubject => "SNS_SUBJECT",
            EnvKey::NotifyMessage => "SNS_MESSAGE",
            EnvKey::PollIntervalSecs => "TRANSCODER_POLL_INTERVAL_SECS",
            EnvKey::WaitTimeoutSecs => "TRANSCODER_WAIT_TIMEOUT_SECS",
            EnvKey::WarningPolicy => "TRANSCODER_WARNING_POLICY",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str()).ok().filter(|v| !v.is_empty())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
