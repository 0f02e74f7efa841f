//! Command dispatcher over the backend's request/response endpoints.
//!
//! Every submit is a single fire-and-forget exchange returning a job
//! identifier. The dispatcher never seeds the job registry: tracking
//! starts when a `job_update` push for that id arrives, so there is an
//! accepted window where a submitted job is invisible to the client.

use reqwest::{Client, StatusCode};
use tracing::debug;

use scoop_models::{Clip, Font, JobId, Template, TemplateDraft};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::requests::{
    ClipRequest, ClipTemplateRequest, ClipsResponse, DownloadRequest, FontsResponse, JobCreated,
    TemplatesResponse, TranscribeRequest,
};

/// HTTP client for the backend's command and fetch endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new dispatcher.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("scoop-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    // =========================================================================
    // Commands (fire-and-forget, each returns a job id)
    // =========================================================================

    /// Submit a source video download.
    pub async fn submit_download(&self, url: impl Into<String>) -> ApiResult<JobId> {
        let body = DownloadRequest { url: url.into() };
        self.submit("/api/download", &body).await
    }

    /// Submit a simple captioned clip cut.
    ///
    /// `source` may be a full server-side path; only the final segment
    /// is sent. `start`/`end` pass through unchecked beyond being
    /// floats; range validation is the backend's job.
    pub async fn submit_clip(
        &self,
        source: &str,
        start: f64,
        end: f64,
        text: Option<String>,
        output_name: Option<String>,
        flip: bool,
    ) -> ApiResult<JobId> {
        let body = ClipRequest {
            filename: final_segment(source).to_string(),
            start,
            end,
            text,
            output_name,
            flip,
        };
        self.submit("/api/clip", &body).await
    }

    /// Submit a transcription of a source video.
    pub async fn submit_transcribe(&self, source: &str) -> ApiResult<JobId> {
        let body = TranscribeRequest {
            filename: final_segment(source).to_string(),
        };
        self.submit("/api/transcribe", &body).await
    }

    /// Submit a templated clip render from a customization draft.
    pub async fn submit_clip_template(
        &self,
        source: &str,
        draft: &TemplateDraft,
    ) -> ApiResult<JobId> {
        let body = ClipTemplateRequest {
            filename: final_segment(source).to_string(),
            template_name: draft.template_name.clone(),
            custom_overlays: draft.overlays.clone(),
            custom_start: draft.start,
            custom_duration: draft.duration,
            custom_output_name: draft.output_name.clone(),
            custom_resolution: draft.resolution.clone(),
            custom_flip: draft.flip,
        };
        self.submit("/api/clip-template", &body).await
    }

    async fn submit<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<JobId> {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::unexpected_status(status.as_u16(), body));
        }

        let created: JobCreated = response.json().await?;
        Ok(created.job_id)
    }

    // =========================================================================
    // Read fetches
    // =========================================================================

    /// Fetch the clips derived from a source video.
    pub async fn fetch_clips(&self, source: &str) -> ApiResult<Vec<Clip>> {
        let filename = urlencoding::encode(final_segment(source));
        let url = self.endpoint(&format!("/api/clips/{}", filename));
        let response: ClipsResponse = self.get_json(&url).await?;
        Ok(response.clips)
    }

    /// Fetch the available templates.
    pub async fn fetch_templates(&self) -> ApiResult<Vec<Template>> {
        let url = self.endpoint("/api/templates");
        let response: TemplatesResponse = self.get_json(&url).await?;
        Ok(response.templates)
    }

    /// Fetch the font reference list.
    pub async fn fetch_fonts(&self) -> ApiResult<Vec<Font>> {
        let url = self.endpoint("/api/fonts");
        let response: FontsResponse = self.get_json(&url).await?;
        Ok(response.fonts)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::unexpected_status(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }

    // =========================================================================
    // Media URLs (byte streams, not modeled further)
    // =========================================================================

    /// URL of a served source video.
    pub fn video_url(&self, source: &str) -> String {
        self.endpoint(&format!(
            "/video/{}",
            urlencoding::encode(final_segment(source))
        ))
    }

    /// URL of a served clip. Clip filenames may carry their source
    /// folder prefix, which stays a path separator on the wire.
    pub fn clip_url(&self, clip_filename: &str) -> String {
        let encoded: Vec<String> = clip_filename
            .split('/')
            .map(|seg| urlencoding::encode(seg).into_owned())
            .collect();
        self.endpoint(&format!("/clips/{}", encoded.join("/")))
    }
}

/// The final path segment of a server-side path.
///
/// Commands always address sources by bare filename; the client never
/// sends full paths.
pub fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Parse a user-supplied seconds value.
///
/// Parseability is the only client-side validation; negative values or
/// inverted ranges are passed through for the backend to reject.
pub fn parse_seconds(field: &'static str, value: &str) -> ApiResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_segment() {
        assert_eq!(final_segment("downloads/x/T1.mp4"), "T1.mp4");
        assert_eq!(final_segment("T1.mp4"), "T1.mp4");
        assert_eq!(final_segment(""), "");
    }

    #[test]
    fn test_parse_seconds_accepts_any_float() {
        assert_eq!(parse_seconds("start", " 1.5 ").unwrap(), 1.5);
        // Out-of-range values are the backend's problem.
        assert_eq!(parse_seconds("start", "-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_seconds_rejects_garbage() {
        let err = parse_seconds("end", "ten").unwrap_err();
        match err {
            ApiError::InvalidNumber { field, value } => {
                assert_eq!(field, "end");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_clip_url_keeps_folder_separator() {
        let client = ApiClient::new(ApiConfig::with_base_url("http://h:1")).unwrap();
        assert_eq!(
            client.clip_url("T1/clip one.mp4"),
            "http://h:1/clips/T1/clip%20one.mp4"
        );
    }
}
