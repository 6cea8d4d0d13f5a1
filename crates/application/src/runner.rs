//! Background execution of analysis jobs.
//!
//! Decouples callers from the long-running pipeline by running each
//! analysis on a dedicated thread, mirroring job state into an injected
//! [`JobStore`] for polling. There is no cancellation for an in-flight
//! job; callers either poll the store or wait on the handle.

use crate::config::AnalysisConfig;
use crate::jobs::{JobStatus, JobStore};
use crate::pipeline::{analyze, AnalysisInput, AnalysisOutcome};
use crate::progress::ProgressSink;
use podium_exercises::Catalog;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::thread::JoinHandle;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("analysis job failed")]
    Failed,
}

/// Handle to a submitted job.
pub struct JobHandle {
    id: Uuid,
    handle: JoinHandle<Option<AnalysisOutcome>>,
}

impl JobHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Block until the job finishes and return its outcome.
    pub fn wait(self) -> Result<AnalysisOutcome, JobError> {
        match self.handle.join() {
            Ok(Some(outcome)) => Ok(outcome),
            _ => Err(JobError::Failed),
        }
    }
}

/// Runs analyses off the caller's thread, tracking state in a `JobStore`.
pub struct JobRunner {
    store: Arc<dyn JobStore>,
}

/// Mirrors pipeline progress into the job store.
struct StoreProgress {
    store: Arc<dyn JobStore>,
    id: Uuid,
}

impl ProgressSink for StoreProgress {
    fn report(&self, percent: u8, message: &str) {
        self.store.update(self.id, JobStatus::Running, percent, message);
    }
}

impl JobRunner {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Submit an analysis; returns immediately with a pollable handle.
    pub fn submit(
        &self,
        input: AnalysisInput,
        config: AnalysisConfig,
        catalog: Catalog,
    ) -> JobHandle {
        let id = Uuid::new_v4();
        self.store.create(id);

        let store = Arc::clone(&self.store);
        let handle = std::thread::spawn(move || {
            store.update(id, JobStatus::Running, 0, "starting");
            let progress = StoreProgress {
                store: Arc::clone(&store),
                id,
            };

            let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
                analyze(&input, &config, &catalog, &progress)
            }));

            match result {
                Ok(outcome) => {
                    store.update(id, JobStatus::Completed, 100, "analysis complete");
                    Some(outcome)
                }
                Err(_) => {
                    tracing::error!(job = %id, "analysis job panicked");
                    store.update(id, JobStatus::Failed, 0, "analysis failed");
                    None
                }
            }
        });

        JobHandle { id, handle }
    }
}
