//! Exercise catalog loading.

use crate::types::{Category, Exercise};
use std::path::Path;

/// Catalog JSON shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered, read-only set of exercises.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    /// The catalog bundled with the crate.
    pub fn bundled() -> Self {
        // The asset is validated by tests; a broken bundle is a build defect.
        serde_json::from_str::<Vec<Exercise>>(BUNDLED_CATALOG)
            .map(|exercises| Self { exercises })
            .expect("bundled catalog is valid JSON")
    }

    /// Load a user-provided catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let exercises: Vec<Exercise> = serde_json::from_str(&content)?;
        tracing::debug!(count = exercises.len(), path = %path.display(), "catalog_loaded");
        Ok(Self { exercises })
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises in `category`, preserving catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.category == category)
    }
}
