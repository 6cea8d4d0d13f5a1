//! Deficiency detection with severity tiers.

use crate::report::ReportSummary;
use podium_prosody::AudioFeatures;
use serde::{Deserialize, Serialize};

/// Categorized delivery problems a report can exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficiencyKind {
    TempoHigh,
    TempoLow,
    Fillers,
    Pauses,
    Repetitions,
    LowEnergy,
    Monotone,
    QuietVoice,
}

/// A detected deficiency and how severe it is (1 = mild, 3 = severe).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deficiency {
    pub kind: DeficiencyKind,
    pub severity: u8,
    pub note: String,
}

impl Deficiency {
    fn new(kind: DeficiencyKind, severity: u8, note: &str) -> Self {
        Self {
            kind,
            severity,
            note: note.to_string(),
        }
    }
}

/// Derive deficiency flags from the metric summary and optional prosody.
///
/// Deterministic: flags are emitted in a fixed evaluation order, then
/// stably sorted by descending severity. Audio-derived flags only fire
/// when audio features are present, so missing audio never reads as a
/// zero-energy delivery.
pub fn detect_deficiencies(
    summary: &ReportSummary,
    audio: Option<&AudioFeatures>,
) -> Vec<Deficiency> {
    let mut flags = Vec::new();

    if summary.avg_tempo > 5.0 {
        flags.push(Deficiency::new(
            DeficiencyKind::TempoHigh,
            3,
            "speaking rate is too fast",
        ));
    } else if summary.avg_tempo > 0.0 && summary.avg_tempo < 2.0 {
        flags.push(Deficiency::new(
            DeficiencyKind::TempoLow,
            2,
            "speaking rate is too slow",
        ));
    }

    if summary.filler_words_count > 15 {
        flags.push(Deficiency::new(
            DeficiencyKind::Fillers,
            3,
            "very frequent filler words",
        ));
    } else if summary.filler_words_count > 7 {
        flags.push(Deficiency::new(
            DeficiencyKind::Fillers,
            2,
            "frequent filler words",
        ));
    } else if summary.filler_words_count > 0 {
        flags.push(Deficiency::new(
            DeficiencyKind::Fillers,
            1,
            "some filler words",
        ));
    }

    if summary.pauses_count > 10 {
        flags.push(Deficiency::new(
            DeficiencyKind::Pauses,
            3,
            "very many long pauses",
        ));
    } else if summary.pauses_count > 5 {
        flags.push(Deficiency::new(
            DeficiencyKind::Pauses,
            2,
            "many long pauses",
        ));
    }

    if summary.repetitions_count > 5 {
        flags.push(Deficiency::new(
            DeficiencyKind::Repetitions,
            2,
            "many repeated words",
        ));
    }

    if let Some(audio) = audio {
        if audio.energy_score > 0.0 {
            if audio.energy_score < 40.0 {
                flags.push(Deficiency::new(
                    DeficiencyKind::LowEnergy,
                    3,
                    "very low vocal energy",
                ));
                flags.push(Deficiency::new(
                    DeficiencyKind::Monotone,
                    3,
                    "monotone delivery",
                ));
            } else if audio.energy_score < 60.0 {
                flags.push(Deficiency::new(
                    DeficiencyKind::Monotone,
                    2,
                    "moderate energy, intonation needs work",
                ));
            }
        }

        if audio.avg_volume > 0.0 && audio.avg_volume < 30.0 {
            flags.push(Deficiency::new(
                DeficiencyKind::QuietVoice,
                3,
                "very quiet voice",
            ));
        } else if audio.avg_volume > 0.0 && audio.avg_volume < 50.0 {
            flags.push(Deficiency::new(DeficiencyKind::QuietVoice, 2, "quiet voice"));
        }

        if audio.pitch_variance > 0.0 && audio.pitch_variance < 200.0 {
            flags.push(Deficiency::new(
                DeficiencyKind::Monotone,
                2,
                "flat intonation",
            ));
        }
    }

    // Stable sort keeps evaluation order within a severity tier.
    flags.sort_by(|a, b| b.severity.cmp(&a.severity));
    flags
}
