//! Template and font snapshots plus the customization draft.

use tracing::debug;

use scoop_models::{Font, Template, TemplateDraft};

/// Store of available templates, fonts and the draft in progress.
///
/// Templates and fonts are read-only snapshots from independent
/// fetches. At most one draft exists at a time; selecting a template
/// discards the prior draft unconditionally (no autosave, no undo).
#[derive(Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
    fonts: Vec<Font>,
    draft: Option<TemplateDraft>,
    listeners: Vec<Box<dyn Fn() + Send>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the template snapshot.
    pub fn set_templates(&mut self, templates: Vec<Template>) {
        debug!("templates: {} loaded", templates.len());
        self.templates = templates;
        self.notify();
    }

    /// Replace the font snapshot.
    pub fn set_fonts(&mut self, fonts: Vec<Font>) {
        debug!("fonts: {} loaded", fonts.len());
        self.fonts = fonts;
        self.notify();
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Open a draft for the named template.
    ///
    /// The draft is a deep, structurally independent copy: later edits
    /// are never observable on the stored template. An unknown name is
    /// a tolerated no-op; the prior draft stays untouched.
    pub fn select_template(&mut self, name: &str) -> Option<&TemplateDraft> {
        let template = self.templates.iter().find(|t| t.name == name)?;
        self.draft = Some(TemplateDraft::from_template(template));
        self.notify();
        self.draft.as_ref()
    }

    /// The draft in progress, if any.
    pub fn draft(&self) -> Option<&TemplateDraft> {
        self.draft.as_ref()
    }

    /// Mutable access for the overlay builder.
    pub fn draft_mut(&mut self) -> Option<&mut TemplateDraft> {
        self.draft.as_mut()
    }

    /// Discard the draft (modal dismissed). The backend is not told.
    pub fn clear_draft(&mut self) {
        self.draft = None;
        self.notify();
    }

    /// Register a callback invoked after every store change.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_models::{Overlay, TemplateData, TextOverlay};

    fn store_with(name: &str, data: TemplateData) -> TemplateStore {
        let mut store = TemplateStore::new();
        store.set_templates(vec![Template {
            name: name.to_string(),
            data,
        }]);
        store
    }

    #[test]
    fn test_select_applies_duration_default() {
        let mut store = store_with("t1", TemplateData::default());
        let draft = store.select_template("t1").unwrap();
        assert_eq!(draft.duration, 10.0);
        assert_eq!(draft.start, 0.0);
    }

    #[test]
    fn test_unknown_name_is_a_no_op() {
        let mut store = store_with("t1", TemplateData::default());
        store.select_template("t1");

        assert!(store.select_template("nope").is_none());
        // Prior draft survives.
        assert_eq!(store.draft().unwrap().template_name, "t1");
    }

    #[test]
    fn test_draft_edits_do_not_leak_into_store() {
        let data = TemplateData {
            overlays: vec![Overlay::Text(TextOverlay::placeholder())],
            ..TemplateData::default()
        };
        let mut store = store_with("t1", data);
        let before = serde_json::to_string(&store.templates()[0]).unwrap();

        store.select_template("t1");
        let draft = store.draft_mut().unwrap();
        match &mut draft.overlays[0] {
            Overlay::Text(t) => t.text = "edited".to_string(),
            Overlay::Emoji(_) => unreachable!(),
        }

        let after = serde_json::to_string(&store.templates()[0]).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reselect_discards_prior_draft() {
        let mut store = store_with("t1", TemplateData::default());
        store.select_template("t1");
        store.draft_mut().unwrap().duration = 42.0;

        store.select_template("t1");
        assert_eq!(store.draft().unwrap().duration, 10.0);
    }
}
