//! Delivery metrics over an ordered segment sequence.
//!
//! Single-pass, deterministic and total: empty input degrades to empty
//! lists and zeroed aggregates, never an error.

mod engine;
mod types;

pub use engine::{analyze, DeliverySettings};
pub use types::{DeliveryMetrics, FillerOccurrence, Pause, Repetition, SpeedIssue};
