//! In-memory job-state tracking.
//!
//! A mapping from job id to `{status, progress, message}`, injected into
//! the runner as a capability. Entries are created at submission, updated
//! at stage boundaries, read by polling callers and evicted after
//! completion plus a retention window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Pollable state of one analysis job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobState {
    pub status: JobStatus,
    pub progress: u8,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

/// Store capability for job state.
pub trait JobStore: Send + Sync {
    /// Register a new job in `Queued` state.
    fn create(&self, id: Uuid);
    /// Update a job's state; unknown ids are ignored.
    fn update(&self, id: Uuid, status: JobStatus, progress: u8, message: &str);
    fn get(&self, id: Uuid) -> Option<JobState>;
}

/// Mutex-guarded in-memory store with retention-based eviction.
pub struct InMemoryJobStore {
    entries: Mutex<HashMap<Uuid, JobState>>,
    retention: Duration,
}

impl InMemoryJobStore {
    pub fn new(retention: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            retention,
        }
    }

    /// Drop terminal jobs whose last update is older than the retention
    /// window. Returns the number of evicted entries.
    pub fn evict_expired(&self) -> usize {
        let cutoff = Utc::now() - self.retention;
        let mut entries = self.entries.lock().expect("job store mutex poisoned");
        let before = entries.len();
        entries.retain(|_, state| !(state.status.is_terminal() && state.updated_at < cutoff));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("job store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

impl JobStore for InMemoryJobStore {
    fn create(&self, id: Uuid) {
        let mut entries = self.entries.lock().expect("job store mutex poisoned");
        entries.insert(
            id,
            JobState {
                status: JobStatus::Queued,
                progress: 0,
                message: "queued".to_string(),
                updated_at: Utc::now(),
            },
        );
    }

    fn update(&self, id: Uuid, status: JobStatus, progress: u8, message: &str) {
        let mut entries = self.entries.lock().expect("job store mutex poisoned");
        if let Some(state) = entries.get_mut(&id) {
            state.status = status;
            state.progress = progress.min(100);
            state.message = message.to_string();
            state.updated_at = Utc::now();
        }
    }

    fn get(&self, id: Uuid) -> Option<JobState> {
        self.entries
            .lock()
            .expect("job store mutex poisoned")
            .get(&id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = InMemoryJobStore::default();
        let id = Uuid::new_v4();
        store.create(id);

        let state = store.get(id).unwrap();
        assert_eq!(state.status, JobStatus::Queued);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let store = InMemoryJobStore::default();
        store.update(Uuid::new_v4(), JobStatus::Running, 50, "half");
        assert!(store.is_empty());
    }

    #[test]
    fn test_progress_capped_at_100() {
        let store = InMemoryJobStore::default();
        let id = Uuid::new_v4();
        store.create(id);
        store.update(id, JobStatus::Running, 250, "overflow");
        assert_eq!(store.get(id).unwrap().progress, 100);
    }

    #[test]
    fn test_eviction_only_touches_expired_terminal_jobs() {
        let store = InMemoryJobStore::new(Duration::zero());
        let done = Uuid::new_v4();
        let running = Uuid::new_v4();
        store.create(done);
        store.create(running);
        store.update(done, JobStatus::Completed, 100, "done");
        store.update(running, JobStatus::Running, 40, "working");
        std::thread::sleep(std::time::Duration::from_millis(5));

        let evicted = store.evict_expired();
        assert_eq!(evicted, 1);
        assert!(store.get(done).is_none());
        assert!(store.get(running).is_some());
    }

    #[test]
    fn test_fresh_terminal_jobs_survive_eviction() {
        let store = InMemoryJobStore::new(Duration::hours(1));
        let id = Uuid::new_v4();
        store.create(id);
        store.update(id, JobStatus::Completed, 100, "done");
        assert_eq!(store.evict_expired(), 0);
        assert!(store.get(id).is_some());
    }
}
