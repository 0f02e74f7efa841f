//! Overlay elements composited onto rendered clips.
//!
//! Overlays are a tagged variant over text and emoji payloads so that
//! invalid field combinations cannot be represented. Position
//! expressions (`x`/`y`) are opaque strings interpreted by the
//! backend's filter engine; the client never validates their syntax.
//! Overlay order within a template is z-order and must be preserved.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One positioned overlay element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Overlay {
    /// Styled text
    Text(TextOverlay),
    /// Emoji glyph rendered as text
    Emoji(EmojiOverlay),
}

impl Overlay {
    /// The wire value of the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Overlay::Text(_) => "text",
            Overlay::Emoji(_) => "emoji",
        }
    }
}

/// A text overlay. Field names follow the renderer's wire contract
/// (camelCase for the compound ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextOverlay {
    /// The text to draw
    #[serde(default)]
    pub text: String,

    /// Horizontal position expression
    #[serde(default = "default_x")]
    pub x: String,

    /// Vertical position expression
    #[serde(default = "default_y")]
    pub y: String,

    /// Font size in points
    #[serde(rename = "fontSize", default = "default_text_size")]
    pub font_size: u32,

    /// Font file path; backend default used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Text color
    #[serde(rename = "textColor", default = "default_text_color")]
    pub text_color: String,

    /// Draw a background box
    #[serde(rename = "box", default)]
    pub boxed: bool,

    /// Box color; ignored by the renderer when `boxed` is false
    #[serde(rename = "boxColor", default = "default_box_color")]
    pub box_color: String,

    /// Draw a drop shadow
    #[serde(default)]
    pub shadow: bool,

    /// Draw a stroke outline
    #[serde(default)]
    pub stroke: bool,

    /// Stroke color; ignored when `stroke` is false
    #[serde(rename = "strokeColor", default = "default_stroke_color")]
    pub stroke_color: String,
}

impl TextOverlay {
    /// A freshly added overlay, centered with editable placeholder text.
    pub fn placeholder() -> Self {
        Self {
            text: "New Text".to_string(),
            x: default_x(),
            y: default_y(),
            font_size: default_text_size(),
            font: None,
            text_color: default_text_color(),
            boxed: false,
            box_color: default_box_color(),
            shadow: false,
            stroke: false,
            stroke_color: default_stroke_color(),
        }
    }
}

/// An emoji overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmojiOverlay {
    /// The emoji glyph(s) to draw
    #[serde(default)]
    pub emoji: String,

    /// Horizontal position expression
    #[serde(default = "default_x")]
    pub x: String,

    /// Vertical position expression
    #[serde(default = "default_y")]
    pub y: String,

    /// Font size in points
    #[serde(rename = "fontSize", default = "default_emoji_size")]
    pub font_size: u32,

    /// Font file path; backend emoji font used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Draw a background box
    #[serde(rename = "box", default)]
    pub boxed: bool,

    /// Draw a drop shadow
    #[serde(default)]
    pub shadow: bool,
}

fn default_x() -> String {
    "(w-text_w)/2".to_string()
}

fn default_y() -> String {
    "(h-text_h)/2".to_string()
}

fn default_text_size() -> u32 {
    28
}

fn default_emoji_size() -> u32 {
    48
}

fn default_text_color() -> String {
    "white".to_string()
}

fn default_box_color() -> String {
    "black@0.6".to_string()
}

fn default_stroke_color() -> String {
    "black".to_string()
}
