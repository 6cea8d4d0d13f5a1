//! Analysis configuration.

use podium_delivery::DeliverySettings;
use podium_prosody::FrameParams;
use std::path::Path;

/// Tunable thresholds and vocabularies for an analysis run.
///
/// Values are taken as given; threshold validation is the caller's concern.
/// The pipeline itself guards every division regardless.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Words per second above which a segment is flagged as too fast.
    pub speed_threshold: f64,
    /// Minimum inter-segment gap in seconds that counts as a pause.
    pub pause_threshold: f64,
    /// Occurrence count a word must exceed to be reported as a repetition.
    pub repetition_threshold: usize,
    /// Lowercase filler terms to flag.
    pub filler_words: Vec<String>,
    /// Maximum number of recommended exercises.
    pub max_exercises: usize,
    /// STFT framing for the prosody stage.
    pub frame: FrameParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let delivery = DeliverySettings::default();
        Self {
            speed_threshold: delivery.speed_threshold,
            pause_threshold: delivery.pause_threshold,
            repetition_threshold: delivery.repetition_threshold,
            filler_words: delivery.filler_words,
            max_exercises: podium_exercises::DEFAULT_LIMIT,
            frame: FrameParams::default(),
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by `SPEED_THRESHOLD`, `PAUSE_THRESHOLD` and
    /// `REPETITION_THRESHOLD` environment variables where set and parseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = env_parse::<f64>("SPEED_THRESHOLD") {
            config.speed_threshold = v;
        }
        if let Some(v) = env_parse::<f64>("PAUSE_THRESHOLD") {
            config.pause_threshold = v;
        }
        if let Some(v) = env_parse::<usize>("REPETITION_THRESHOLD") {
            config.repetition_threshold = v;
        }
        config
    }

    pub(crate) fn delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            filler_words: self.filler_words.clone(),
            speed_threshold: self.speed_threshold,
            pause_threshold: self.pause_threshold,
            repetition_threshold: self.repetition_threshold,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Load a newline-delimited filler-word list.
///
/// A missing or unreadable file falls back to the default vocabulary so an
/// absent config never stops an analysis.
pub fn load_filler_words(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let words: Vec<String> = content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect();
            if words.is_empty() {
                DeliverySettings::default().filler_words
            } else {
                words
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "filler list unavailable, using defaults");
            DeliverySettings::default().filler_words
        }
    }
}
