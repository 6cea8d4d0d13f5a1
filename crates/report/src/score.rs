//! Composite scoring and human-readable recommendations.

use crate::flags::{Deficiency, DeficiencyKind};
use crate::report::ReportSummary;

/// Baseline score for a flawless delivery.
pub const MAX_SCORE: u32 = 10;

/// Composite delivery score in [0, 10].
///
/// Fixed deductions per deficiency: tempo outside [2, 5] wps −2;
/// pauses >10 −2, >5 −1; fillers >15 −3, >7 −1; repetitions >5 −1.
pub fn composite_score(summary: &ReportSummary) -> u32 {
    let mut deductions = 0u32;

    if summary.avg_tempo > 5.0 || summary.avg_tempo < 2.0 {
        deductions += 2;
    }
    if summary.pauses_count > 10 {
        deductions += 2;
    } else if summary.pauses_count > 5 {
        deductions += 1;
    }
    if summary.filler_words_count > 15 {
        deductions += 3;
    } else if summary.filler_words_count > 7 {
        deductions += 1;
    }
    if summary.repetitions_count > 5 {
        deductions += 1;
    }

    MAX_SCORE.saturating_sub(deductions)
}

/// One recommendation per distinct deficiency kind, or an encouraging
/// default when nothing was flagged.
pub fn recommendations(flags: &[Deficiency]) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();

    for flag in flags {
        if seen.contains(&flag.kind) {
            continue;
        }
        seen.push(flag.kind);
        out.push(recommendation_for(flag.kind).to_string());
    }

    if out.is_empty() {
        out.push("Great delivery! Keep it up.".to_string());
        out.push("All metrics are within the normal range.".to_string());
    }
    out
}

fn recommendation_for(kind: DeficiencyKind) -> &'static str {
    match kind {
        DeficiencyKind::TempoHigh => "Slow down your speaking rate and let key points land.",
        DeficiencyKind::TempoLow => "Pick up the pace to keep the audience engaged.",
        DeficiencyKind::Fillers => "Cut filler words; practice pausing silently instead.",
        DeficiencyKind::Pauses => "Shorten long pauses and work on smoother transitions.",
        DeficiencyKind::Repetitions => "Avoid repeating the same words; vary your vocabulary.",
        DeficiencyKind::LowEnergy => "Raise your vocal energy with breathing exercises.",
        DeficiencyKind::Monotone => "Add intonation contrast to avoid a monotone delivery.",
        DeficiencyKind::QuietVoice => "Project your voice; speak from the diaphragm.",
    }
}
