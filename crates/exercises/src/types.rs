//! Exercise catalog entry types.

use serde::{Deserialize, Serialize};

/// Training category an exercise targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tempo,
    FillerWords,
    Pauses,
    Repetitions,
    Intonation,
    Breathing,
    /// General-purpose category used for backfill.
    Diction,
    /// General-purpose category used for backfill.
    Practice,
}

/// Exercise difficulty, ordered beginner → advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulties in selection order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
}
