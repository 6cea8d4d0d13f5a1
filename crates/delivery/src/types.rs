//! Typed records produced by the delivery metrics engine.

use serde::{Deserialize, Serialize};

/// Silence gap between two consecutive segments exceeding the pause threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pause {
    /// End of the earlier segment.
    pub start: f64,
    /// Start of the later segment.
    pub end: f64,
    pub duration: f64,
}

/// A configured filler term found inside a segment.
///
/// Matching is substring containment on the segment's lowercased text, so a
/// filler is logged at most once per segment it appears in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerOccurrence {
    pub word: String,
    pub segment_index: usize,
    pub segment_start: f64,
    /// Full text of the owning segment.
    pub context: String,
}

/// A word used more often than the repetition threshold across the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repetition {
    pub word: String,
    pub count: usize,
    /// Start times of the segments containing the word, one per segment.
    pub occurrences: Vec<f64>,
}

/// A segment spoken faster than the speed threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedIssue {
    /// Segment start time.
    pub time: f64,
    /// Words per second of the segment.
    pub wps: f64,
    pub text: String,
}

/// Everything the delivery engine derives from a segment sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryMetrics {
    pub pauses: Vec<Pause>,
    pub filler_words: Vec<FillerOccurrence>,
    pub repetitions: Vec<Repetition>,
    pub speed_issues: Vec<SpeedIssue>,
    /// Total words over total speech duration; 0 when no speech.
    pub avg_tempo: f64,
    /// Sum of segment durations in seconds (excludes inter-segment silence).
    pub total_duration: f64,
    pub total_words: usize,
}
