//! Audio prosody analysis: loudness and pitch-variation features.
//!
//! The analyzer turns a mono waveform into frame-level RMS and
//! spectral-centroid curves, averages them over each segment's time range
//! and reduces the result to a single 0–100 energy score. Prosody is an
//! enhancement stage: any failure here is surfaced as [`ProsodyError`] so
//! the pipeline can continue with delivery-only metrics.

mod features;
mod wav;

pub use features::{
    analyze_waveform, energy_score, frame_series, AudioFeatures, FrameParams, FrameSeries,
};
pub use wav::load_wav;

/// Why prosody features could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ProsodyError {
    #[error("failed to decode audio: {0}")]
    Decode(#[from] hound::Error),
    #[error("audio stream is empty")]
    EmptyAudio,
}

pub type Result<T> = std::result::Result<T, ProsodyError>;
