//! Source video catalog entries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A source video known to the backend.
///
/// Identity is `path`; the list is wholesale-replaced on every
/// `videos_update` push, so records are immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Video {
    /// Display title (filename without extension)
    pub title: String,

    /// Server-side path, unique per video
    pub path: String,
}

impl Video {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    /// The final path segment, as sent to command endpoints.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_last_segment() {
        let v = Video::new("T1", "downloads/x/T1.mp4");
        assert_eq!(v.filename(), "T1.mp4");

        let bare = Video::new("T2", "T2.mp4");
        assert_eq!(bare.filename(), "T2.mp4");
    }
}
