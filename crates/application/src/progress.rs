//! Progress reporting abstraction.
//!
//! A one-way, best-effort notification sink. Stages call it at their
//! boundaries; it must never block or propagate errors back into the
//! pipeline.

use std::sync::{Arc, Mutex};

/// Sink for pipeline progress notifications.
pub trait ProgressSink: Send + Sync {
    /// Report completion percentage (0–100) with a short status message.
    fn report(&self, percent: u8, message: &str);
}

/// Shared progress sink reference.
pub type ProgressSinkRef = Arc<dyn ProgressSink>;

/// Discards all progress reports.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Captures progress reports for inspection in tests.
#[derive(Default)]
pub struct MemoryProgress {
    reports: Mutex<Vec<(u8, String)>>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(u8, String)> {
        self.reports.lock().expect("progress mutex poisoned").clone()
    }
}

impl ProgressSink for MemoryProgress {
    fn report(&self, percent: u8, message: &str) {
        self.reports
            .lock()
            .expect("progress mutex poisoned")
            .push((percent, message.to_string()));
    }
}
