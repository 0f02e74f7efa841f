//! Session state: the single place where push events mutate stores.
//!
//! The channel reader, completed fetches and user actions all funnel
//! into this loop one at a time, which is what makes the registry's
//! in-order full-replace contract hold.

use tracing::{debug, info};

use scoop_models::PushEvent;
use scoop_state::{CatalogStore, JobRegistry, RegistrySignal, TemplateStore};

/// All client-side state for one connected session.
///
/// Rebuilt from server push/pull on every (re)connect; nothing
/// persists across sessions.
#[derive(Default)]
pub struct Session {
    pub registry: JobRegistry,
    pub catalog: CatalogStore,
    pub templates: TemplateStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one push event to the stores.
    ///
    /// Returns a signal when the event requires a follow-up command on
    /// the channel (currently only a catalog refresh after a finished
    /// download).
    pub fn handle_event(&mut self, event: PushEvent) -> Option<RegistrySignal> {
        match event {
            PushEvent::VideosUpdate(videos) => {
                self.catalog.replace_videos(videos);
                None
            }
            PushEvent::JobUpdate(job) => self.registry.apply_update(job),
            PushEvent::TranscriptSegment(segment) => {
                // Passive: logged, never stored.
                debug!("transcript segment: {}", segment);
                None
            }
            PushEvent::Log(line) => {
                info!("backend: {}", line);
                None
            }
        }
    }
}
