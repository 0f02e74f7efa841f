//! Job definitions as pushed by the backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a backend job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Fetch a source video from a URL
    Download,
    /// Cut a simple captioned clip
    Clip,
    /// Transcribe a source video
    Transcribe,
    /// Render a clip from a template
    ClipTemplate,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Download => "download",
            JobKind::Clip => "clip",
            JobKind::Transcribe => "transcribe",
            JobKind::ClipTemplate => "clip_template",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend-reported job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job is waiting in the backend queue
    #[default]
    Queued,
    /// Job is being processed
    Running,
    /// Job completed successfully
    Finished,
    /// Job failed
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Running => "running",
            JobStatus::Finished => "finished",
            JobStatus::Error => "error",
        }
    }

    /// True once the backend will send no further updates for this job.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Error)
    }

    /// True while `progress` is meaningful.
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Queued | JobStatus::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job as received on a `job_update` push event.
///
/// The backend sends the full record on every update; the client never
/// merges fields. Extra server-side fields (`meta`, timestamps) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Unique job ID
    pub id: JobId,

    /// Job kind
    pub kind: JobKind,

    /// Current status
    #[serde(default)]
    pub status: JobStatus,

    /// Progress (0-100), meaningful only while queued/running
    #[serde(default)]
    pub progress: f64,

    /// Opaque result payload, present once finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Error message, set iff status = error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Job {
    /// The filename of a finished download, when the backend reported one.
    pub fn downloaded_filename(&self) -> Option<&str> {
        if self.kind != JobKind::Download || self.status != JobStatus::Finished {
            return None;
        }
        self.result
            .as_ref()
            .and_then(|r| r.get("filename"))
            .and_then(|f| f.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_decodes_server_record() {
        // Matches the backend's job dict, including fields we ignore.
        let raw = serde_json::json!({
            "id": "a1b2",
            "kind": "clip_template",
            "meta": {"filename": "v.mp4"},
            "status": "running",
            "progress": 42.5,
            "created_at": 1700000000.0,
            "updated_at": 1700000001.0,
            "result": null,
            "error": null
        });

        let job: Job = serde_json::from_value(raw).unwrap();
        assert_eq!(job.id.as_str(), "a1b2");
        assert_eq!(job.kind, JobKind::ClipTemplate);
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.progress, 42.5);
        assert!(job.result.is_none());
    }

    #[test]
    fn test_status_terminality() {
        assert!(JobStatus::Finished.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(JobStatus::Queued.is_active());
        assert!(JobStatus::Running.is_active());
        assert!(!JobStatus::Running.is_terminal());
    }

    #[test]
    fn test_downloaded_filename() {
        let job = Job {
            id: JobId::from("j1"),
            kind: JobKind::Download,
            status: JobStatus::Finished,
            progress: 100.0,
            result: Some(serde_json::json!({"filename": "161_ab.mp4", "path": "downloads/161_ab.mp4"})),
            error: None,
        };
        assert_eq!(job.downloaded_filename(), Some("161_ab.mp4"));

        let running = Job {
            status: JobStatus::Running,
            ..job.clone()
        };
        assert_eq!(running.downloaded_filename(), None);
    }
}
