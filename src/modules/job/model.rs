use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Source format hints. The provider probes the source itself when a
/// field is left at `auto`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatHints {
    pub frame_rate: String,
    pub resolution: String,
    pub aspect_ratio: String,
    pub interlaced: String,
    pub container: String,
}

impl FormatHints {
    pub fn auto() -> Self {
        Self {
            frame_rate: "auto".to_string(),
            resolution: "auto".to_string(),
            aspect_ratio: "auto".to_string(),
            interlaced: "auto".to_string(),
            container: "auto".to_string(),
        }
    }
}

impl Default for FormatHints {
    fn default() -> Self {
        Self::auto()
    }
}

/// One output rendition: where it goes, which preset encodes it, and the
/// segment duration for segmented streaming formats like HLS.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputSpec {
    pub key: String,
    pub preset_id: String,
    pub segment_duration: Option<String>,
}

/// Destination key for a rendition: the prefix plus the source key with
/// its extension stripped, e.g. `HLS/1M` + `a/sample.mp4` -> `HLS/1M/a/sample`.
pub fn rendition_key(prefix: &str, source_key: &str) -> String {
    let base = match source_key.rsplit_once('.') {
        Some((base, ext)) if !ext.contains('/') => base,
        _ => source_key,
    };
    format!("{}/{}", prefix.trim_end_matches('/'), base)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobSpec {
    pub pipeline_id: String,
    pub input_key: String,
    pub hints: FormatHints,
    pub outputs: Vec<OutputSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Job {
    pub id: String,
    pub state: JobState,
}

/// Provider-owned job status, observed only. `Submitted -> Progressing ->
/// {Complete, Warning, Error, Canceled}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum JobState {
    Submitted,
    Progressing,
    Complete,
    Warning,
    Error,
    Canceled,
}

impl JobState {
    pub fn from_provider(status: &str) -> Option<Self> {
        match status {
            "Submitted" => Some(JobState::Submitted),
            "Progressing" => Some(JobState::Progressing),
            "Complete" => Some(JobState::Complete),
            "Warning" => Some(JobState::Warning),
            "Error" => Some(JobState::Error),
            "Canceled" => Some(JobState::Canceled),
            _ => None,
        }
    }

    /// Warning is terminal here: the waiter never polls past it.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Complete | JobState::Warning | JobState::Error | JobState::Canceled
        )
    }

    pub fn is_success(&self, policy: WarningPolicy) -> bool {
        match self {
            JobState::Complete => true,
            JobState::Warning => policy == WarningPolicy::TreatAsSuccess,
            _ => false,
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobState::Submitted => "Submitted",
            JobState::Progressing => "Progressing",
            JobState::Complete => "Complete",
            JobState::Warning => "Warning",
            JobState::Error => "Error",
            JobState::Canceled => "Canceled",
        };
        write!(f, "{s}")
    }
}

/// Whether a run that ends in `Warning` counts as a success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningPolicy {
    TreatAsSuccess,
    TreatAsFailure,
}

impl FromStr for WarningPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(WarningPolicy::TreatAsSuccess),
            "failure" => Ok(WarningPolicy::TreatAsFailure),
            other => Err(format!("unknown warning policy '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendition_key_strips_extension() {
        assert_eq!(
            rendition_key("HLS/1M", "D0002022073_00000/sample.mp4"),
            "HLS/1M/D0002022073_00000/sample"
        );
    }

    #[test]
    fn rendition_key_keeps_extensionless_keys() {
        assert_eq!(rendition_key("HLS/1M/", "dir/sample"), "HLS/1M/dir/sample");
        assert_eq!(rendition_key("HLS/1M", "dir.v2/sample"), "HLS/1M/dir.v2/sample");
    }

    #[test]
    fn rendition_key_strips_only_last_extension() {
        assert_eq!(rendition_key("HLS/1M", "a.b/c.tar.gz"), "HLS/1M/a.b/c.tar");
    }

    #[test]
    fn terminal_states() {
        assert!(!JobState::Submitted.is_terminal());
        assert!(!JobState::Progressing.is_terminal());
        assert!(JobState::Complete.is_terminal());
        assert!(JobState::Warning.is_terminal());
        assert!(JobState::Error.is_terminal());
        assert!(JobState::Canceled.is_terminal());
    }

    #[test]
    fn warning_outcome_follows_policy() {
        assert!(JobState::Warning.is_success(WarningPolicy::TreatAsSuccess));
        assert!(!JobState::Warning.is_success(WarningPolicy::TreatAsFailure));
        assert!(JobState::Complete.is_success(WarningPolicy::TreatAsFailure));
        assert!(!JobState::Error.is_success(WarningPolicy::TreatAsSuccess));
    }

    #[test]
    fn provider_status_parsing() {
        assert_eq!(JobState::from_provider("Complete"), Some(JobState::Complete));
        assert_eq!(JobState::from_provider("Progressing"), Some(JobState::Progressing));
        assert_eq!(JobState::from_provider("Paused"), None);
    }
}
