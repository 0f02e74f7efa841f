//! Derived clip snapshots.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A clip derived from a source video.
///
/// Read-only snapshot fetched on demand via `GET /api/clips/{filename}`;
/// not kept in sync after the fetch. Identity is `filename`. The server
/// includes extra bookkeeping fields (`overlays`, `template`, `path`)
/// that the client does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Clip {
    /// Clip filename, possibly prefixed with the source video folder
    pub filename: String,

    /// Clip start within the source, seconds
    #[serde(default)]
    pub start: f64,

    /// Clip end within the source, seconds
    #[serde(default)]
    pub end: f64,

    /// Caption text, empty when the clip had none
    #[serde(default)]
    pub text: String,

    /// Unix timestamp of creation
    #[serde(default)]
    pub created_at: f64,
}

impl Clip {
    /// Clip duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
