//! Deficiency-driven exercise selection.

use crate::catalog::Catalog;
use crate::types::{Category, Difficulty, Exercise};
use podium_report::{Deficiency, DeficiencyKind};

/// Default maximum number of selected exercises.
pub const DEFAULT_LIMIT: usize = 7;

/// Backfill categories used when flagged categories yield too few entries.
const GENERAL_CATEGORIES: [Category; 2] = [Category::Diction, Category::Practice];

/// How many entries a single backfill category may contribute.
const BACKFILL_PER_CATEGORY: usize = 2;

fn category_for(kind: DeficiencyKind) -> Category {
    match kind {
        DeficiencyKind::TempoHigh | DeficiencyKind::TempoLow => Category::Tempo,
        DeficiencyKind::Fillers => Category::FillerWords,
        DeficiencyKind::Pauses => Category::Pauses,
        DeficiencyKind::Repetitions => Category::Repetitions,
        DeficiencyKind::Monotone => Category::Intonation,
        DeficiencyKind::LowEnergy | DeficiencyKind::QuietVoice => Category::Breathing,
    }
}

/// Select up to `limit` exercises for the detected deficiencies.
///
/// Categories are visited in descending severity; within a category,
/// entries are pulled beginner → advanced, one per difficulty tier, skipping
/// duplicates. When flagged categories run dry, general-purpose categories
/// backfill. Deterministic for a given catalog and flag list; an empty
/// result means the catalog has nothing to offer, not an error.
pub fn select_exercises(flags: &[Deficiency], catalog: &Catalog, limit: usize) -> Vec<Exercise> {
    let mut ranked: Vec<&Deficiency> = flags.iter().collect();
    // Stable: flags of equal severity keep their detection order.
    ranked.sort_by(|a, b| b.severity.cmp(&a.severity));

    let mut selected: Vec<Exercise> = Vec::new();

    for flag in ranked {
        if selected.len() >= limit {
            break;
        }
        let category = category_for(flag.kind);
        if catalog.in_category(category).next().is_none() {
            tracing::warn!(?category, "no exercises available for category");
            continue;
        }

        for difficulty in Difficulty::ALL {
            if selected.len() >= limit {
                break;
            }
            let next = catalog
                .in_category(category)
                .find(|e| e.difficulty == difficulty && !is_selected(&selected, e));
            if let Some(exercise) = next {
                selected.push(exercise.clone());
            }
        }
    }

    if selected.len() < limit {
        for category in GENERAL_CATEGORIES {
            if selected.len() >= limit {
                break;
            }
            let backfill: Vec<&Exercise> = catalog
                .in_category(category)
                .filter(|e| !is_selected(&selected, e))
                .take(BACKFILL_PER_CATEGORY)
                .collect();
            for exercise in backfill {
                if selected.len() >= limit {
                    break;
                }
                selected.push(exercise.clone());
            }
        }
    }

    tracing::debug!(flags = flags.len(), selected = selected.len(), "exercises_selected");
    selected
}

fn is_selected(selected: &[Exercise], candidate: &Exercise) -> bool {
    selected.iter().any(|e| e.id == candidate.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(kind: DeficiencyKind, severity: u8) -> Deficiency {
        Deficiency {
            kind,
            severity,
            note: String::new(),
        }
    }

    #[test]
    fn test_no_flags_backfills_general_categories() {
        let catalog = Catalog::bundled();
        let selected = select_exercises(&[], &catalog, DEFAULT_LIMIT);
        assert!(!selected.is_empty());
        assert!(selected
            .iter()
            .all(|e| GENERAL_CATEGORIES.contains(&e.category)));
        // At most two entries per general category.
        assert!(selected.len() <= GENERAL_CATEGORIES.len() * BACKFILL_PER_CATEGORY);
    }

    #[test]
    fn test_most_severe_category_first() {
        let catalog = Catalog::bundled();
        let flags = vec![
            flag(DeficiencyKind::Fillers, 1),
            flag(DeficiencyKind::TempoHigh, 3),
        ];
        let selected = select_exercises(&flags, &catalog, DEFAULT_LIMIT);
        assert_eq!(selected[0].category, Category::Tempo);
    }

    #[test]
    fn test_beginner_before_advanced_within_category() {
        let catalog = Catalog::bundled();
        let flags = vec![flag(DeficiencyKind::TempoHigh, 3)];
        let selected = select_exercises(&flags, &catalog, DEFAULT_LIMIT);
        let tempo: Vec<_> = selected
            .iter()
            .filter(|e| e.category == Category::Tempo)
            .collect();
        assert!(tempo.len() >= 2);
        for pair in tempo.windows(2) {
            assert!(pair[0].difficulty <= pair[1].difficulty);
        }
    }

    #[test]
    fn test_limit_respected() {
        let catalog = Catalog::bundled();
        let flags = vec![
            flag(DeficiencyKind::TempoHigh, 3),
            flag(DeficiencyKind::Fillers, 3),
            flag(DeficiencyKind::Pauses, 3),
            flag(DeficiencyKind::Monotone, 3),
            flag(DeficiencyKind::QuietVoice, 3),
        ];
        let selected = select_exercises(&flags, &catalog, 4);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_no_duplicate_selection() {
        let catalog = Catalog::bundled();
        // Two kinds mapping to the same category must not duplicate entries.
        let flags = vec![
            flag(DeficiencyKind::LowEnergy, 3),
            flag(DeficiencyKind::QuietVoice, 3),
        ];
        let selected = select_exercises(&flags, &catalog, DEFAULT_LIMIT);
        let mut ids: Vec<_> = selected.iter().map(|e| e.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_selection_is_stable() {
        let catalog = Catalog::bundled();
        let flags = vec![
            flag(DeficiencyKind::Fillers, 2),
            flag(DeficiencyKind::Monotone, 2),
            flag(DeficiencyKind::TempoLow, 2),
        ];
        let first: Vec<_> = select_exercises(&flags, &catalog, DEFAULT_LIMIT)
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let second: Vec<_> = select_exercises(&flags, &catalog, DEFAULT_LIMIT)
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_yields_empty_selection() {
        let catalog = Catalog::from_exercises(Vec::new());
        let flags = vec![flag(DeficiencyKind::TempoHigh, 3)];
        let selected = select_exercises(&flags, &catalog, DEFAULT_LIMIT);
        assert!(selected.is_empty());
    }
}
