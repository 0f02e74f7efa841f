//! Shared data models for the ClipScoop control-plane client.
//!
//! This crate provides Serde-serializable types for:
//! - Jobs tracked through the push channel
//! - Source videos, derived clips and fonts
//! - Clip templates, overlays and customization drafts
//! - Push-channel message schemas

pub mod clip;
pub mod event;
pub mod font;
pub mod job;
pub mod overlay;
pub mod template;
pub mod video;

// Re-export common types
pub use clip::Clip;
pub use event::{ClientCommand, Envelope, PushEvent};
pub use font::Font;
pub use job::{Job, JobId, JobKind, JobStatus};
pub use overlay::{EmojiOverlay, Overlay, TextOverlay};
pub use template::{Template, TemplateData, TemplateDraft};
pub use video::Video;
