//! Groups timestamped words into sentence-like segments.

use crate::tokenize::tokenize;
use serde::{Deserialize, Serialize};

/// Terminal punctuation that closes a segment.
const BOUNDARY_MARKS: [char; 4] = ['.', '!', '?', '…'];

/// A single transcribed word with its speech span in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A sentence-like span of speech.
///
/// Segments are created once by [`segment_words`] and read-only afterward;
/// their temporal order is significant for pause and repetition analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    /// Lowercased word tokens of `text`.
    pub words: Vec<String>,
}

impl Segment {
    /// Speech span in seconds, never negative.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Speech rate in words per second; 0 for a zero-length span.
    pub fn words_per_second(&self) -> f64 {
        let duration = self.duration();
        if duration > 0.0 {
            self.word_count() as f64 / duration
        } else {
            0.0
        }
    }
}

/// Group an ordered word stream into segments at punctuation boundaries.
///
/// A segment closes when a word ends in `.`, `!`, `?` or `…`. Segment timing
/// spans the first word's start to the last word's end, so inter-segment
/// silence is not attributed to either side. A trailing buffer without
/// closing punctuation is still emitted; no words are ever dropped.
pub fn segment_words(words: &[Word]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut start: Option<f64> = None;
    let mut end = 0.0f64;

    for word in words {
        if start.is_none() {
            start = Some(word.start);
        }
        end = word.end;
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(word.text.trim());

        if word.text.trim_end().ends_with(&BOUNDARY_MARKS[..]) {
            flush(&mut segments, &mut text, &mut start, end);
        }
    }

    flush(&mut segments, &mut text, &mut start, end);
    segments
}

fn flush(segments: &mut Vec<Segment>, text: &mut String, start: &mut Option<f64>, end: f64) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        segments.push(Segment {
            start: start.unwrap_or(end),
            end,
            text: trimmed.to_string(),
            words: tokenize(trimmed),
        });
    }
    text.clear();
    *start = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[(&str, f64, f64)]) -> Vec<Word> {
        words
            .iter()
            .map(|(t, s, e)| Word::new(*t, *s, *e))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(segment_words(&[]).is_empty());
    }

    #[test]
    fn test_single_word_no_punctuation() {
        let segments = segment_words(&[Word::new("hello", 1.0, 1.5)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 1.0);
        assert_eq!(segments[0].end, 1.5);
        assert_eq!(segments[0].words, vec!["hello"]);
    }

    #[test]
    fn test_boundary_on_terminal_punctuation() {
        let words = sentence(&[
            ("Good", 0.0, 0.3),
            ("morning.", 0.4, 0.8),
            ("How", 1.2, 1.4),
            ("are", 1.5, 1.6),
            ("you?", 1.7, 2.0),
        ]);
        let segments = segment_words(&words);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Good morning.");
        assert_eq!(segments[0].end, 0.8);
        assert_eq!(segments[1].start, 1.2);
        assert_eq!(segments[1].text, "How are you?");
    }

    #[test]
    fn test_ellipsis_closes_segment() {
        let words = sentence(&[("well…", 0.0, 0.5), ("maybe", 1.0, 1.4)]);
        let segments = segment_words(&words);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_trailing_buffer_emitted() {
        let words = sentence(&[("ended", 0.0, 0.4), ("mid", 0.5, 0.7), ("sentence", 0.8, 1.3)]);
        let segments = segment_words(&words);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "ended mid sentence");
        assert_eq!(segments[0].end, 1.3);
    }

    // No word may be dropped or duplicated across the emitted segments.
    #[test]
    fn test_segmentation_completeness() {
        let words = sentence(&[
            ("One", 0.0, 0.2),
            ("two.", 0.3, 0.5),
            ("Three!", 0.9, 1.2),
            ("Four", 1.5, 1.7),
            ("five", 1.8, 2.0),
        ]);
        let segments = segment_words(&words);
        let total: usize = segments.iter().map(Segment::word_count).sum();
        assert_eq!(total, words.len());
    }

    #[test]
    fn test_segments_time_ordered() {
        let words = sentence(&[
            ("a.", 0.0, 0.5),
            ("b.", 1.0, 1.5),
            ("c.", 2.0, 2.5),
        ]);
        let segments = segment_words(&words);
        for pair in segments.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_zero_duration_rate_is_zero() {
        let seg = Segment {
            start: 2.0,
            end: 2.0,
            text: "word".to_string(),
            words: vec!["word".to_string()],
        };
        assert_eq!(seg.words_per_second(), 0.0);
        assert_eq!(seg.duration(), 0.0);
    }

    #[test]
    fn test_cyrillic_tokens() {
        let words = sentence(&[("Привет,", 0.0, 0.4), ("это", 0.5, 0.7), ("тест.", 0.8, 1.2)]);
        let segments = segment_words(&words);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].words, vec!["привет", "это", "тест"]);
    }
}
