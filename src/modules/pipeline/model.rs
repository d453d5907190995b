use serde::Serialize;

/// Topic ARN per pipeline event class. `None` means the provider sends
/// nothing for that class (wired as the empty string on the API).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NotificationMap {
    pub progressing: Option<String>,
    pub completed: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl NotificationMap {
    pub fn completed_only(topic_arn: impl Into<String>) -> Self {
        Self {
            completed: Some(topic_arn.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.progressing.is_none()
            && self.completed.is_none()
            && self.warning.is_none()
            && self.error.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PipelineSpec {
    pub name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub role_arn: String,
    pub notifications: NotificationMap,
}

/// A provisioned pipeline. The bucket and role fields are carried over
/// from the spec unchanged; only `id` and `arn` come from the provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pipeline {
    pub id: String,
    pub arn: String,
    pub name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub role_arn: String,
}
