//! Debounced search sessions.
//!
//! A [`SearchSession`] holds a record list and the latest query. Query
//! changes are applied after a quiet period; only the last query of a burst
//! triggers a pass. Without a tokio runtime the pass runs immediately.

use crate::engine::{search, SearchOptions, SearchResult};
use crate::searchable::Searchable;
use jowafrique_core::models::{Meal, WeeklyPlan};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

/// Quiet period before a query is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

struct State<T> {
    items: Vec<T>,
    query: String,
    applied: String,
    results: Vec<SearchResult<T>>,
    generation: u64,
    pending: bool,
    passes: u64,
}

struct Inner<T> {
    options: SearchOptions,
    debounce: Duration,
    state: Mutex<State<T>>,
}

impl<T: Searchable + Clone> Inner<T> {
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn apply(&self, generation: u64) {
        let mut state = self.lock();
        if state.generation != generation || !state.pending {
            return;
        }
        state.applied = state.query.clone();
        state.pending = false;
        self.refresh(&mut state);
    }

    fn refresh(&self, state: &mut State<T>) {
        let results: Vec<SearchResult<T>> = search(&state.items, &state.applied, &self.options)
            .into_iter()
            .map(|r| SearchResult {
                item: r.item.clone(),
                score: r.score,
                highlights: r.highlights,
            })
            .collect();
        state.passes += 1;
        debug!(
            query = %state.applied,
            results = results.len(),
            pass = state.passes,
            "search pass"
        );
        state.results = results;
    }
}

/// Search state over a record list with a debounced query
pub struct SearchSession<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for SearchSession<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SearchSession<T>
where
    T: Searchable + Clone + Send + 'static,
{
    /// Session over `items` with the default debounce.
    #[must_use]
    pub fn new(items: Vec<T>, options: SearchOptions) -> Self {
        Self::with_debounce(items, options, DEFAULT_DEBOUNCE)
    }

    /// Session with a custom quiet period.
    #[must_use]
    pub fn with_debounce(items: Vec<T>, options: SearchOptions, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                options,
                debounce,
                state: Mutex::new(State {
                    items,
                    query: String::new(),
                    applied: String::new(),
                    results: Vec::new(),
                    generation: 0,
                    pending: false,
                    passes: 0,
                }),
            }),
        }
    }

    /// Options used by every pass
    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.inner.options
    }

    /// Change the query.
    ///
    /// A blank query clears the results at once. Otherwise the pass is
    /// scheduled after the quiet period, superseding any pending one.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let generation = {
            let mut state = self.inner.lock();
            state.generation += 1;
            state.query = query;

            if state.query.trim().is_empty() {
                state.applied.clear();
                state.results.clear();
                state.pending = false;
                return;
            }
            state.pending = true;
            state.generation
        };

        if let Ok(handle) = Handle::try_current() {
            let inner = Arc::clone(&self.inner);
            let debounce = self.inner.debounce;
            handle.spawn(async move {
                tokio::time::sleep(debounce).await;
                inner.apply(generation);
            });
        } else {
            self.inner.apply(generation);
        }
    }

    /// Apply a pending query now instead of waiting for the quiet period.
    pub fn flush(&self) {
        let generation = {
            let state = self.inner.lock();
            if !state.pending {
                return;
            }
            state.generation
        };
        self.inner.apply(generation);
    }

    /// Replace the records and re-run the last applied query.
    pub fn set_items(&self, items: Vec<T>) {
        let mut state = self.inner.lock();
        state.items = items;
        if state.applied.trim().is_empty() {
            state.results.clear();
        } else {
            self.inner.refresh(&mut state);
        }
    }

    /// Drop the query and the results.
    pub fn clear(&self) {
        let mut state = self.inner.lock();
        state.generation += 1;
        state.query.clear();
        state.applied.clear();
        state.results.clear();
        state.pending = false;
    }

    /// Latest query, applied or not
    #[must_use]
    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    /// Results of the last applied query
    #[must_use]
    pub fn results(&self) -> Vec<SearchResult<T>> {
        self.inner.lock().results.clone()
    }

    /// Whether a query change is waiting for its pass
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.inner.lock().pending
    }

    /// Whether the last pass matched anything
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.inner.lock().results.is_empty()
    }

    /// Number of passes run so far
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.inner.lock().passes
    }
}

/// Meal search over name, ingredient and cuisine.
#[must_use]
pub fn meal_search(meals: Vec<Meal>) -> SearchSession<Meal> {
    SearchSession::new(meals, SearchOptions::meals())
}

/// Plan search over the plan name.
#[must_use]
pub fn plan_search(plans: Vec<WeeklyPlan>) -> SearchSession<WeeklyPlan> {
    SearchSession::new(plans, SearchOptions::plans())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meals() -> Vec<Meal> {
        ["Poulet DG", "Poisson braisé", "Ndolé"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Meal {
                id,
                name: (*name).to_string(),
                ..Meal::default()
            })
            .collect()
    }

    #[test]
    fn test_runs_immediately_without_runtime() {
        let session = meal_search(meals());
        session.set_query("poul");

        assert!(!session.is_searching());
        assert_eq!(session.passes(), 1);
        assert_eq!(session.results()[0].item.name, "Poulet DG");
    }

    #[test]
    fn test_blank_query_clears() {
        let session = meal_search(meals());
        session.set_query("poul");
        assert!(session.has_results());

        session.set_query("  ");
        assert!(!session.has_results());
        assert!(!session.is_searching());
        assert_eq!(session.passes(), 1);
    }

    #[test]
    fn test_set_items_reruns_applied_query() {
        let session = meal_search(Vec::new());
        session.set_query("ndolé");
        assert!(!session.has_results());

        session.set_items(meals());
        assert_eq!(session.results()[0].item.id, 3);
    }

    #[test]
    fn test_clear() {
        let session = meal_search(meals());
        session.set_query("poul");
        session.clear();
        assert!(session.query().is_empty());
        assert!(!session.has_results());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_waits_for_quiet_period() {
        let session = meal_search(meals());
        session.set_query("poul");

        assert!(session.is_searching());
        assert!(!session.has_results());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(session.is_searching());
        assert_eq!(session.passes(), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!session.is_searching());
        assert_eq!(session.passes(), 1);
        assert_eq!(session.results()[0].item.name, "Poulet DG");
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_single_pass() {
        let session = meal_search(meals());
        session.set_query("po");
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.set_query("poi");
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.set_query("poisson");

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(session.passes(), 1);
        assert_eq!(session.results()[0].item.name, "Poisson braisé");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_applies_immediately_once() {
        let session = meal_search(meals());
        session.set_query("ndolé");
        session.flush();

        assert!(!session.is_searching());
        assert_eq!(session.results()[0].item.id, 3);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(session.passes(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_pending_pass() {
        let session = plan_search(vec![WeeklyPlan {
            id: 1,
            plan_name: "Semaine festive".into(),
            ..WeeklyPlan::default()
        }]);
        session.set_query("festive");
        session.clear();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(session.passes(), 0);
        assert!(!session.has_results());
    }
}
