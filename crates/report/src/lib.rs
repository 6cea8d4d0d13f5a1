//! Merges delivery and prosody metrics into one report, scores it and
//! derives categorized recommendations.

mod flags;
mod report;
mod score;

pub use flags::{detect_deficiencies, Deficiency, DeficiencyKind};
pub use report::{AnalysisReport, ReportSummary};
pub use score::{composite_score, recommendations, MAX_SCORE};
