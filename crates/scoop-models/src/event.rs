//! Push-channel message schemas.
//!
//! The channel carries JSON text frames of the shape
//! `{"event": <name>, "data": <payload>}`. Decoding is done in two
//! steps (envelope, then payload) so that unknown event names are
//! tolerated instead of failing the whole frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::job::Job;
use crate::video::Video;

/// Raw channel frame.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Envelope {
    /// Event name
    pub event: String,

    /// Event payload; absent for bare commands like `get_videos`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A typed push event from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// Wholesale replacement of the source video catalog
    VideosUpdate(Vec<Video>),
    /// Full-record job update
    JobUpdate(Job),
    /// Live transcription segment; surfaced passively
    TranscriptSegment(serde_json::Value),
    /// Backend log line; surfaced passively
    Log(String),
}

impl PushEvent {
    /// Decode a frame into a typed event.
    ///
    /// Returns `Ok(None)` for event names the client does not handle.
    /// A payload that fails to decode for a known event is an error.
    pub fn from_envelope(envelope: Envelope) -> Result<Option<Self>, serde_json::Error> {
        let data = envelope.data.unwrap_or(serde_json::Value::Null);
        let event = match envelope.event.as_str() {
            "videos_update" => PushEvent::VideosUpdate(serde_json::from_value(data)?),
            "job_update" => PushEvent::JobUpdate(serde_json::from_value(data)?),
            "transcript_segment" => PushEvent::TranscriptSegment(data),
            "log" => PushEvent::Log(serde_json::from_value(data)?),
            _ => return Ok(None),
        };
        Ok(Some(event))
    }

    /// The wire event name.
    pub fn name(&self) -> &'static str {
        match self {
            PushEvent::VideosUpdate(_) => "videos_update",
            PushEvent::JobUpdate(_) => "job_update",
            PushEvent::TranscriptSegment(_) => "transcript_segment",
            PushEvent::Log(_) => "log",
        }
    }
}

/// A command the client emits on the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Request a catalog refresh (`videos_update` follows)
    GetVideos,
}

impl ClientCommand {
    /// Encode as a channel frame.
    pub fn to_envelope(self) -> Envelope {
        match self {
            ClientCommand::GetVideos => Envelope {
                event: "get_videos".to_string(),
                data: None,
            },
        }
    }
}
