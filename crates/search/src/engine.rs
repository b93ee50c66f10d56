//! Keyed fuzzy search over in-memory records.

use crate::error::{Result, SearchError};
use crate::highlight::highlight;
use crate::relevance::calculate_relevance;
use crate::searchable::Searchable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default minimum score for a record to be returned
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default minimum query length, in characters
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Options of a search pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Field keys compared against the query
    pub keys: Vec<String>,
    /// Minimum best-field score, `0.0..=1.0`
    pub threshold: f64,
    /// Queries shorter than this (after trimming) return nothing
    pub min_match_char_length: usize,
}

impl SearchOptions {
    /// Options over `keys` with the default threshold and minimum length.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            threshold: DEFAULT_THRESHOLD,
            min_match_char_length: DEFAULT_MIN_MATCH_CHAR_LENGTH,
        }
    }

    /// Meal search: name, ingredient and cuisine at threshold 0.3
    #[must_use]
    pub fn meals() -> Self {
        Self {
            threshold: 0.3,
            ..Self::new(["name", "ingredient", "cuisine"])
        }
    }

    /// Plan search: plan name at threshold 0.4
    #[must_use]
    pub fn plans() -> Self {
        Self {
            threshold: 0.4,
            ..Self::new(["planName"])
        }
    }

    /// Set the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidOptions`] when outside `0.0..=1.0`.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        self.threshold = threshold;
        self.validate()?;
        Ok(self)
    }

    /// Set the minimum query length.
    #[must_use]
    pub fn with_min_match_char_length(mut self, len: usize) -> Self {
        self.min_match_char_length = len;
        self
    }

    /// Check the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidOptions`] for a threshold outside
    /// `0.0..=1.0` or an empty key list.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidOptions(format!(
                "threshold must be within 0..=1, got {}",
                self.threshold
            )));
        }
        if self.keys.is_empty() {
            return Err(SearchError::InvalidOptions("no search keys".into()));
        }
        Ok(())
    }
}

/// A record that passed the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<T> {
    /// The matched record
    pub item: T,
    /// Best score across the searched fields
    pub score: f64,
    /// Highlighted field values, one per matching field, deduplicated
    pub highlights: Vec<String>,
}

/// Score every record against `query` and return those at or above the
/// threshold, best first.
///
/// Records with equal scores keep their input order.
pub fn search<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<&'a T>> {
    let query = query.trim();
    if query.is_empty() || query.chars().count() < options.min_match_char_length {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut results: Vec<SearchResult<&T>> = items
        .iter()
        .filter_map(|item| {
            let mut best = 0.0_f64;
            let mut highlights: Vec<String> = Vec::new();

            for value in options.keys.iter().filter_map(|key| item.field(key)) {
                let score = calculate_relevance(&needle, &value.to_lowercase());
                if score > 0.0 {
                    let marked = highlight(value, query);
                    if !highlights.contains(&marked) {
                        highlights.push(marked);
                    }
                }
                best = best.max(score);
            }

            (best >= options.threshold).then(|| SearchResult {
                item,
                score: best,
                highlights,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}
