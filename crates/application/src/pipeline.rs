//! The analysis pipeline.
//!
//! One logical unit of work per request: segmentation, then the delivery
//! and prosody stages concurrently (they share nothing but the read-only
//! segment list), then aggregation, scoring and exercise selection. Each
//! run owns its data exclusively, so concurrent analyses need no locking.

use crate::config::AnalysisConfig;
use crate::progress::ProgressSink;
use podium_exercises::{select_exercises, Catalog, Exercise};
use podium_report::{
    composite_score, detect_deficiencies, recommendations, AnalysisReport, Deficiency,
    ReportSummary,
};
use podium_transcript::{segment_words, transcript_with_timestamps, Word};
use serde::{Deserialize, Serialize};

/// A decoded mono waveform.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Everything the pipeline consumes for one run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    /// Timestamped words from the transcription backend, in temporal order.
    pub words: Vec<Word>,
    /// Optional audio for the prosody stage.
    pub audio: Option<AudioClip>,
}

/// Everything the pipeline produces for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub summary: ReportSummary,
    /// Composite delivery score in [0, 10].
    pub score: u32,
    pub deficiencies: Vec<Deficiency>,
    pub recommendations: Vec<String>,
    pub exercises: Vec<Exercise>,
    /// Human-readable transcript with `[H:MM:SS]` segment markers.
    pub transcript: String,
}

/// Run the full analysis.
///
/// Total over its inputs: malformed or empty words degrade to an empty
/// report, and a prosody failure downgrades the run to delivery-only
/// metrics instead of failing it.
pub fn analyze(
    input: &AnalysisInput,
    config: &AnalysisConfig,
    catalog: &Catalog,
    progress: &dyn ProgressSink,
) -> AnalysisOutcome {
    progress.report(10, "Segmenting transcript");
    let segments = segment_words(&input.words);
    tracing::info!(words = input.words.len(), segments = segments.len(), "transcript_segmented");
    progress.report(25, "Transcript segmented");

    progress.report(30, "Analyzing delivery and audio features");
    let settings = config.delivery_settings();
    let (delivery, audio) = std::thread::scope(|scope| {
        let delivery_stage = scope.spawn(|| podium_delivery::analyze(&segments, &settings));
        let prosody_stage = scope.spawn(|| {
            input.audio.as_ref().and_then(|clip| {
                match podium_prosody::analyze_waveform(
                    &clip.samples,
                    clip.sample_rate,
                    &segments,
                    &config.frame,
                ) {
                    Ok(features) => Some(features),
                    Err(e) => {
                        tracing::warn!(error = %e, "prosody unavailable, continuing without audio metrics");
                        None
                    }
                }
            })
        });
        (
            delivery_stage.join().expect("delivery stage panicked"),
            prosody_stage.join().expect("prosody stage panicked"),
        )
    });
    progress.report(70, "Metrics computed");

    progress.report(85, "Scoring delivery");
    let transcript = transcript_with_timestamps(&segments);
    let report = AnalysisReport::new(segments, delivery, audio);
    let summary = report.summary();
    let score = composite_score(&summary);
    let deficiencies = detect_deficiencies(&summary, report.audio.as_ref());
    let recommendations = recommendations(&deficiencies);

    progress.report(95, "Selecting exercises");
    let exercises = select_exercises(&deficiencies, catalog, config.max_exercises);

    tracing::info!(
        score,
        deficiencies = deficiencies.len(),
        exercises = exercises.len(),
        "analysis_complete"
    );
    progress.report(100, "Analysis complete");

    AnalysisOutcome {
        report,
        summary,
        score,
        deficiencies,
        recommendations,
        exercises,
        transcript,
    }
}
