//! Wire bodies for the command and fetch endpoints.

use serde::{Deserialize, Serialize};

use scoop_models::{Clip, Font, JobId, Overlay, Template};

/// `POST /api/download`
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRequest {
    pub url: String,
}

/// `POST /api/clip`
#[derive(Debug, Clone, Serialize)]
pub struct ClipRequest {
    pub filename: String,
    pub start: f64,
    pub end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    pub flip: bool,
}

/// `POST /api/transcribe`
#[derive(Debug, Clone, Serialize)]
pub struct TranscribeRequest {
    pub filename: String,
}

/// `POST /api/clip-template`
///
/// The `custom_*` fields override the template stored on the backend;
/// the client always sends the full customization from the draft.
#[derive(Debug, Clone, Serialize)]
pub struct ClipTemplateRequest {
    pub filename: String,
    pub template_name: String,
    pub custom_overlays: Vec<Overlay>,
    pub custom_start: f64,
    pub custom_duration: f64,
    pub custom_output_name: String,
    pub custom_resolution: String,
    pub custom_flip: bool,
}

/// Response of every command endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JobCreated {
    pub job_id: JobId,
}

/// `GET /api/clips/{filename}`
#[derive(Debug, Clone, Deserialize)]
pub struct ClipsResponse {
    #[serde(default)]
    pub clips: Vec<Clip>,
}

/// `GET /api/templates`
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesResponse {
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// `GET /api/fonts`
#[derive(Debug, Clone, Deserialize)]
pub struct FontsResponse {
    #[serde(default)]
    pub fonts: Vec<Font>,
}
