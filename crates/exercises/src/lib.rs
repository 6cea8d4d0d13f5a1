//! Exercise catalog and deficiency-driven selection.
//!
//! A fixed catalog of practice exercises, each tagged with a category and
//! difficulty, plus a deterministic selector that maps detected delivery
//! deficiencies to a ranked training set.

mod catalog;
mod selector;
mod types;

pub use catalog::{Catalog, CatalogError};
pub use selector::{select_exercises, DEFAULT_LIMIT};
pub use types::{Category, Difficulty, Exercise};
