//! Mutation API over a draft's overlay list.

use scoop_models::{EmojiOverlay, Overlay, TemplateDraft, TextOverlay};

/// Editor for one draft's overlays.
///
/// New overlays are always appended, never inserted, so append order
/// stays z-order. Removal shifts the tail down one position. Edits are
/// per-field and unvalidated: an inconsistent combination (say, a box
/// color with the box disabled) is permitted and simply ignored by the
/// renderer.
pub struct OverlayBuilder<'a> {
    draft: &'a mut TemplateDraft,
}

impl<'a> OverlayBuilder<'a> {
    pub fn new(draft: &'a mut TemplateDraft) -> Self {
        Self { draft }
    }

    /// Append a new text overlay with placeholder defaults.
    /// Returns its index.
    pub fn add_overlay(&mut self) -> usize {
        self.draft
            .overlays
            .push(Overlay::Text(TextOverlay::placeholder()));
        self.draft.overlays.len() - 1
    }

    /// Append a new emoji overlay. Returns its index.
    pub fn add_emoji(&mut self, emoji: impl Into<String>) -> usize {
        self.draft.overlays.push(Overlay::Emoji(EmojiOverlay {
            emoji: emoji.into(),
            ..centered_emoji()
        }));
        self.draft.overlays.len() - 1
    }

    /// Remove the overlay at `index`. Out-of-bounds is a no-op.
    pub fn remove_overlay(&mut self, index: usize) -> bool {
        if index >= self.draft.overlays.len() {
            return false;
        }
        self.draft.overlays.remove(index);
        true
    }

    /// Number of overlays in the draft.
    pub fn len(&self) -> usize {
        self.draft.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draft.overlays.is_empty()
    }

    /// Direct access to an overlay for field edits.
    pub fn overlay_mut(&mut self, index: usize) -> Option<&mut Overlay> {
        self.draft.overlays.get_mut(index)
    }

    // =========================================================================
    // Per-field edits. Each returns whether the edit applied; an edit
    // addressed at a missing index or the wrong overlay kind does
    // nothing.
    // =========================================================================

    /// Set the text of a text overlay.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.text = text.into();
                true
            }
            _ => false,
        }
    }

    /// Set the emoji of an emoji overlay.
    pub fn set_emoji(&mut self, index: usize, emoji: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Emoji(e)) => {
                e.emoji = emoji.into();
                true
            }
            _ => false,
        }
    }

    /// Set the position expressions. Opaque to the client; the backend
    /// interprets them.
    pub fn set_position(&mut self, index: usize, x: impl Into<String>, y: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.x = x.into();
                t.y = y.into();
                true
            }
            Some(Overlay::Emoji(e)) => {
                e.x = x.into();
                e.y = y.into();
                true
            }
            None => false,
        }
    }

    /// Set the font size.
    pub fn set_font_size(&mut self, index: usize, size: u32) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.font_size = size;
                true
            }
            Some(Overlay::Emoji(e)) => {
                e.font_size = size;
                true
            }
            None => false,
        }
    }

    /// Set or clear the font path.
    pub fn set_font(&mut self, index: usize, font: Option<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.font = font;
                true
            }
            Some(Overlay::Emoji(e)) => {
                e.font = font;
                true
            }
            None => false,
        }
    }

    /// Set the text color of a text overlay.
    pub fn set_text_color(&mut self, index: usize, color: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.text_color = color.into();
                true
            }
            _ => false,
        }
    }

    /// Toggle the background box.
    pub fn set_boxed(&mut self, index: usize, boxed: bool) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.boxed = boxed;
                true
            }
            Some(Overlay::Emoji(e)) => {
                e.boxed = boxed;
                true
            }
            None => false,
        }
    }

    /// Set the box color of a text overlay.
    pub fn set_box_color(&mut self, index: usize, color: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.box_color = color.into();
                true
            }
            _ => false,
        }
    }

    /// Toggle the drop shadow.
    pub fn set_shadow(&mut self, index: usize, shadow: bool) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.shadow = shadow;
                true
            }
            Some(Overlay::Emoji(e)) => {
                e.shadow = shadow;
                true
            }
            None => false,
        }
    }

    /// Toggle the stroke outline of a text overlay.
    pub fn set_stroke(&mut self, index: usize, stroke: bool) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.stroke = stroke;
                true
            }
            _ => false,
        }
    }

    /// Set the stroke color of a text overlay.
    pub fn set_stroke_color(&mut self, index: usize, color: impl Into<String>) -> bool {
        match self.draft.overlays.get_mut(index) {
            Some(Overlay::Text(t)) => {
                t.stroke_color = color.into();
                true
            }
            _ => false,
        }
    }
}

fn centered_emoji() -> EmojiOverlay {
    EmojiOverlay {
        emoji: String::new(),
        x: "(w-text_w)/2".to_string(),
        y: "(h-text_h)/2".to_string(),
        font_size: 48,
        font: None,
        boxed: false,
        shadow: false,
    }
}
