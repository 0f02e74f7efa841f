//! Source video catalog and per-video clip list.

use tracing::debug;

use scoop_models::{Clip, Video};

/// Catalog of known source videos plus the transient clip list for the
/// currently selected video.
///
/// The video list is wholesale-replaced on every `videos_update`. The
/// clip list follows the *most recently selected* video: a response
/// for a video that is no longer selected is discarded, so a slow
/// earlier fetch can never clobber a later one (last-requested-wins).
#[derive(Default)]
pub struct CatalogStore {
    videos: Vec<Video>,
    selected: Option<String>,
    clips: Vec<Clip>,
    listeners: Vec<Box<dyn Fn() + Send>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole video list. No merge, no dedup; the backend
    /// guarantees path uniqueness.
    pub fn replace_videos(&mut self, videos: Vec<Video>) {
        debug!("catalog: {} videos", videos.len());
        self.videos = videos;
        self.notify();
    }

    /// Current video list.
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Select a video and clear the stale clip list. The caller is
    /// expected to start a clip fetch for the returned path.
    pub fn select_video(&mut self, path: impl Into<String>) -> String {
        let path = path.into();
        self.selected = Some(path.clone());
        self.clips.clear();
        self.notify();
        path
    }

    /// Currently selected video path.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Apply a completed clip fetch.
    ///
    /// Returns false and changes nothing when `path` is no longer the
    /// selected video; the response raced with a later selection.
    pub fn apply_clips(&mut self, path: &str, clips: Vec<Clip>) -> bool {
        if self.selected.as_deref() != Some(path) {
            debug!("catalog: dropping stale clips response for {}", path);
            return false;
        }
        self.clips = clips;
        self.notify();
        true
    }

    /// Clip list for the selected video.
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Register a callback invoked after every catalog change.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}
