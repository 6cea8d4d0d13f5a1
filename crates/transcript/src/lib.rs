//! Transcript data model and sentence segmentation.
//!
//! A transcription backend hands us a flat stream of timestamped words.
//! This crate groups them into sentence-like [`Segment`]s at punctuation
//! boundaries, which is the unit every downstream analysis works on.

mod segmenter;
mod tokenize;

pub use segmenter::{segment_words, Segment, Word};
pub use tokenize::tokenize;

/// Render segments as a human-readable transcript with `[H:MM:SS]` markers.
pub fn transcript_with_timestamps(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("[{}] {}", format_timestamp(s.start), s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h}:{m:02}:{s:02}")
}
