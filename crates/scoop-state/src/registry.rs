//! Authoritative client-side view of backend jobs.

use std::collections::HashMap;

use tracing::debug;

use scoop_models::{Job, JobKind, JobStatus};

/// Cross-component effect of applying a job update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrySignal {
    /// A download finished; the catalog must be re-requested or the
    /// new video stays invisible.
    RefreshCatalog,
}

type UpdateListener = Box<dyn Fn(&Job) + Send>;

/// Registry of all jobs seen this session, keyed by job id.
///
/// Jobs are created implicitly on the first push referencing an unseen
/// id and replaced wholesale on every subsequent push. Nothing is ever
/// evicted: the registry grows for the lifetime of the session, which
/// matches the backend's own retention.
#[derive(Default)]
pub struct JobRegistry {
    jobs: HashMap<String, Job>,
    listeners: Vec<UpdateListener>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pushed job record.
    ///
    /// Full-record replace, never a field merge. Correct only when
    /// updates for one id arrive in channel order, which the channel's
    /// single reader guarantees.
    pub fn apply_update(&mut self, job: Job) -> Option<RegistrySignal> {
        debug!(
            "job {} {} {} {:.1}%",
            job.id, job.kind, job.status, job.progress
        );

        let signal = if job.kind == JobKind::Download && job.status == JobStatus::Finished {
            Some(RegistrySignal::RefreshCatalog)
        } else {
            None
        };

        for listener in &self.listeners {
            listener(&job);
        }
        self.jobs.insert(job.id.as_str().to_string(), job);
        signal
    }

    /// Read-only view of the current mapping.
    pub fn snapshot(&self) -> &HashMap<String, Job> {
        &self.jobs
    }

    /// Look up one job.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Number of jobs seen this session.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Register a callback invoked on every applied update.
    pub fn subscribe(&mut self, listener: impl Fn(&Job) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }
}
