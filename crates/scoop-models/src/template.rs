//! Clip templates and customization drafts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::overlay::Overlay;

/// A named, reusable clip specification as stored on the backend.
///
/// Templates are read-only on the client; editing happens on a
/// [`TemplateDraft`] produced by [`TemplateDraft::from_template`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Template {
    /// Template name, unique
    pub name: String,

    /// Template payload
    pub data: TemplateData,
}

/// Template payload. All customization fields are optional in storage;
/// defaults are applied when a draft is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TemplateData {
    /// Ordered overlay list (order is z-order)
    #[serde(default)]
    pub overlays: Vec<Overlay>,

    /// Clip start within the source, seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,

    /// Clip duration, seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Output filename pattern; `{timestamp}` is resolved by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,

    /// Output resolution, e.g. "1080:1920"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Mirror the video horizontally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip: Option<bool>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A mutable working copy of a template's customization.
///
/// Structurally independent of the stored [`Template`]: the overlay
/// list is cloned element by element, so draft edits are never
/// observable on the original. Discarded on cancel or template switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TemplateDraft {
    /// Name of the template this draft was opened from
    pub template_name: String,

    /// Ordered overlay list (order is z-order)
    pub overlays: Vec<Overlay>,

    /// Clip start within the source, seconds
    pub start: f64,

    /// Clip duration, seconds
    pub duration: f64,

    /// Output filename pattern
    pub output_name: String,

    /// Output resolution
    pub resolution: String,

    /// Mirror the video horizontally
    pub flip: bool,
}

pub const DEFAULT_DRAFT_START: f64 = 0.0;
pub const DEFAULT_DRAFT_DURATION: f64 = 10.0;
pub const DEFAULT_DRAFT_RESOLUTION: &str = "1080:1920";

impl TemplateDraft {
    /// Open a draft from a stored template, applying the documented
    /// defaults for absent fields.
    pub fn from_template(template: &Template) -> Self {
        let data = &template.data;
        Self {
            template_name: template.name.clone(),
            overlays: data.overlays.clone(),
            start: data.start.unwrap_or(DEFAULT_DRAFT_START),
            duration: data.duration.unwrap_or(DEFAULT_DRAFT_DURATION),
            output_name: data
                .output_name
                .clone()
                .unwrap_or_else(|| format!("{}_{{timestamp}}.mp4", template.name)),
            resolution: data
                .resolution
                .clone()
                .unwrap_or_else(|| DEFAULT_DRAFT_RESOLUTION.to_string()),
            flip: data.flip.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::TextOverlay;

    fn sparse_template() -> Template {
        Template {
            name: "t1".to_string(),
            data: TemplateData {
                overlays: vec![Overlay::Text(TextOverlay::placeholder())],
                ..TemplateData::default()
            },
        }
    }

    #[test]
    fn test_draft_defaults() {
        let draft = TemplateDraft::from_template(&sparse_template());
        assert_eq!(draft.start, 0.0);
        assert_eq!(draft.duration, 10.0);
        assert_eq!(draft.resolution, "1080:1920");
        assert!(!draft.flip);
        assert_eq!(draft.output_name, "t1_{timestamp}.mp4");
    }

    #[test]
    fn test_draft_keeps_stored_values() {
        let mut template = sparse_template();
        template.data.start = Some(3.5);
        template.data.duration = Some(25.0);
        template.data.resolution = Some("720:1280".to_string());
        template.data.flip = Some(true);
        template.data.output_name = Some("intro.mp4".to_string());

        let draft = TemplateDraft::from_template(&template);
        assert_eq!(draft.start, 3.5);
        assert_eq!(draft.duration, 25.0);
        assert_eq!(draft.resolution, "720:1280");
        assert!(draft.flip);
        assert_eq!(draft.output_name, "intro.mp4");
    }

    #[test]
    fn test_draft_is_structurally_independent() {
        let template = sparse_template();
        let before = serde_json::to_string(&template).unwrap();

        let mut draft = TemplateDraft::from_template(&template);
        match &mut draft.overlays[0] {
            Overlay::Text(t) => t.text = "mutated".to_string(),
            Overlay::Emoji(_) => unreachable!(),
        }
        draft.duration = 99.0;

        // The stored template must be byte-for-byte unchanged.
        let after = serde_json::to_string(&template).unwrap();
        assert_eq!(before, after);
    }
}
