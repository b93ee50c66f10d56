//! Relevance scoring for search results.

use crate::fuzzy::similarity;

/// How a query matched a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Field equals the query
    Exact,
    /// Query occurs inside the field
    Contains,
    /// Field starts with the query
    StartsWith,
    /// Edit-distance similarity
    Fuzzy(f64),
}

impl MatchKind {
    /// Score in `0.0..=1.0`
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Self::Exact => 1.0,
            Self::Contains => 0.8,
            Self::StartsWith => 0.9,
            Self::Fuzzy(score) => score,
        }
    }
}

/// Classify how `query` matches `text`.
///
/// Both are expected lower-cased. Checks run in order exact, contains,
/// starts-with, so a prefix (also a substring) is classified as `Contains`.
#[must_use]
pub fn classify(query: &str, text: &str) -> MatchKind {
    if query == text {
        MatchKind::Exact
    } else if text.contains(query) {
        MatchKind::Contains
    } else if text.starts_with(query) {
        MatchKind::StartsWith
    } else {
        MatchKind::Fuzzy(similarity(query, text))
    }
}

/// Score `text` against `query`, both lower-cased.
#[must_use]
pub fn calculate_relevance(query: &str, text: &str) -> f64 {
    classify(query, text).score()
}
