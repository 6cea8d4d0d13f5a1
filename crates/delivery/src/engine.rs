//! The delivery metrics engine.

use crate::types::{DeliveryMetrics, FillerOccurrence, Pause, Repetition, SpeedIssue};
use podium_transcript::Segment;
use std::collections::HashMap;

/// Thresholds and filler vocabulary for a delivery analysis run.
#[derive(Debug, Clone)]
pub struct DeliverySettings {
    /// Lowercase filler terms; phrases of several words are allowed.
    pub filler_words: Vec<String>,
    /// Words per second above which a segment is flagged.
    pub speed_threshold: f64,
    /// Minimum inter-segment gap (seconds) that counts as a pause.
    pub pause_threshold: f64,
    /// A word must occur strictly more than this many times to be a repetition.
    pub repetition_threshold: usize,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            // The default vocabulary targets Russian-language transcripts,
            // matching the bundled transcription presets.
            filler_words: ["ну", "это", "вот", "как бы", "типа", "короче"]
                .into_iter()
                .map(String::from)
                .collect(),
            speed_threshold: 5.0,
            pause_threshold: 1.0,
            repetition_threshold: 3,
        }
    }
}

/// Compute pacing, pause, filler and repetition metrics over `segments`.
///
/// Deterministic: identical input always yields identical output, with
/// repetitions reported in first-occurrence order.
pub fn analyze(segments: &[Segment], settings: &DeliverySettings) -> DeliveryMetrics {
    let mut pauses = Vec::new();
    let mut filler_words = Vec::new();
    let mut speed_issues = Vec::new();

    let mut total_duration = 0.0f64;
    let mut total_words = 0usize;
    let mut all_words: Vec<&str> = Vec::new();

    for (i, seg) in segments.iter().enumerate() {
        let lower = seg.text.to_lowercase();
        for filler in &settings.filler_words {
            if !filler.is_empty() && lower.contains(filler.as_str()) {
                filler_words.push(FillerOccurrence {
                    word: filler.clone(),
                    segment_index: i,
                    segment_start: seg.start,
                    context: seg.text.clone(),
                });
            }
        }

        total_duration += seg.duration();
        total_words += seg.word_count();
        all_words.extend(seg.words.iter().map(String::as_str));

        if seg.words_per_second() > settings.speed_threshold {
            speed_issues.push(SpeedIssue {
                time: seg.start,
                wps: seg.words_per_second(),
                text: seg.text.clone(),
            });
        }

        if i > 0 {
            let gap = seg.start - segments[i - 1].end;
            if gap > settings.pause_threshold {
                pauses.push(Pause {
                    start: segments[i - 1].end,
                    end: seg.start,
                    duration: gap,
                });
            }
        }
    }

    let repetitions = find_repetitions(segments, &all_words, settings.repetition_threshold);

    let avg_tempo = if total_duration > 0.0 {
        total_words as f64 / total_duration
    } else {
        0.0
    };

    tracing::debug!(
        segments = segments.len(),
        pauses = pauses.len(),
        fillers = filler_words.len(),
        repetitions = repetitions.len(),
        speed_issues = speed_issues.len(),
        avg_tempo,
        "delivery_metrics_computed"
    );

    DeliveryMetrics {
        pauses,
        filler_words,
        repetitions,
        speed_issues,
        avg_tempo,
        total_duration,
        total_words,
    }
}

/// Words occurring strictly more than `threshold` times, in the order each
/// word first appears. A segment contributes one occurrence per word no
/// matter how often the word repeats inside it.
fn find_repetitions(segments: &[Segment], all_words: &[&str], threshold: usize) -> Vec<Repetition> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for &word in all_words {
        let entry = counts.entry(word).or_insert(0);
        if *entry == 0 {
            first_seen.push(word);
        }
        *entry += 1;
    }

    first_seen
        .into_iter()
        .filter_map(|word| {
            let count = counts[word];
            if count <= threshold {
                return None;
            }
            let occurrences = segments
                .iter()
                .filter(|seg| seg.words.iter().any(|w| w == word))
                .map(|seg| seg.start)
                .collect();
            Some(Repetition {
                word: word.to_string(),
                count,
                occurrences,
            })
        })
        .collect()
}
