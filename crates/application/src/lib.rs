//! End-to-end delivery analysis.
//!
//! Wires the pipeline stages together: segmentation, delivery metrics and
//! prosody (run concurrently), aggregation/scoring, and exercise selection.
//! Also provides the job-state store and background runner so callers can
//! poll long-running analyses instead of blocking on them.

mod config;
mod jobs;
mod pipeline;
mod progress;
mod runner;

pub use config::{load_filler_words, AnalysisConfig};
pub use jobs::{InMemoryJobStore, JobState, JobStatus, JobStore};
pub use pipeline::{analyze, AnalysisInput, AnalysisOutcome, AudioClip};
pub use progress::{MemoryProgress, NullProgress, ProgressSink, ProgressSinkRef};
pub use runner::{JobError, JobHandle, JobRunner};
