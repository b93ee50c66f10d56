//! Local fuzzy search over meals and weekly plans.
//!
//! This crate provides:
//! - Levenshtein edit distance and normalized similarity
//! - Per-field relevance scoring with a best-field rule
//! - Case-preserving `<mark>` highlighting
//! - Debounced search sessions
//!
//! # Example
//!
//! ```
//! use jowafrique_core::models::Meal;
//! use jowafrique_search::{search, SearchOptions};
//!
//! let meals = vec![Meal { id: 1, name: "Poulet DG".into(), ..Meal::default() }];
//! let results = search(&meals, "poul", &SearchOptions::meals());
//! assert_eq!(results[0].highlights, vec!["<mark>Poul</mark>et DG"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod engine;
mod error;
mod fuzzy;
mod highlight;
mod relevance;
mod searchable;
mod session;

pub use engine::{
    search, SearchOptions, SearchResult, DEFAULT_MIN_MATCH_CHAR_LENGTH, DEFAULT_THRESHOLD,
};
pub use error::{Result, SearchError};
pub use fuzzy::{levenshtein_distance, similarity};
pub use highlight::{highlight, MARK_CLOSE, MARK_OPEN};
pub use relevance::{calculate_relevance, classify, MatchKind};
pub use searchable::Searchable;
pub use session::{meal_search, plan_search, SearchSession, DEFAULT_DEBOUNCE};
