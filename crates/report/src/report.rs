//! The aggregate analysis report.

use podium_delivery::DeliveryMetrics;
use podium_prosody::AudioFeatures;
use podium_transcript::Segment;
use serde::{Deserialize, Serialize};

/// The sole artifact handed to scoring, plotting and persistence.
///
/// Fully reconstructible from its JSON form; every field is a plain
/// number, string or list thereof, and all numbers are finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub segments: Vec<Segment>,
    #[serde(flatten)]
    pub delivery: DeliveryMetrics,
    /// Absent when audio was not supplied or could not be analyzed; never a
    /// zeroed sentinel.
    pub audio: Option<AudioFeatures>,
}

impl AnalysisReport {
    pub fn new(
        segments: Vec<Segment>,
        delivery: DeliveryMetrics,
        audio: Option<AudioFeatures>,
    ) -> Self {
        Self {
            segments,
            delivery,
            audio,
        }
    }

    /// Flat counters used by downstream scoring and rendering.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            avg_tempo: round2(self.delivery.avg_tempo),
            total_duration: round2(self.delivery.total_duration),
            total_words: self.delivery.total_words,
            pauses_count: self.delivery.pauses.len(),
            filler_words_count: self.delivery.filler_words.len(),
            repetitions_count: self.delivery.repetitions.len(),
            speed_issues_count: self.delivery.speed_issues.len(),
        }
    }
}

/// Flat, JSON-encodable metric summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub avg_tempo: f64,
    pub total_duration: f64,
    pub total_words: usize,
    pub pauses_count: usize,
    pub filler_words_count: usize,
    pub repetitions_count: usize,
    pub speed_issues_count: usize,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
