//! State cell shared by every store
//!
//! A [`Resource`] holds the data of one backend-held collection or object
//! together with its loading flag and last error. Locks are never held across
//! an `.await`; a poisoned lock is recovered since the data stays valid.

use crate::error::{StoreError, StoreResult};
use std::collections::HashSet;
use std::sync::{Mutex, RwLock};

struct State<T> {
    data: T,
    pending: usize,
    error: Option<String>,
}

/// Remote-backed value with loading and error status
pub struct Resource<T> {
    state: RwLock<State<T>>,
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Resource<T> {
    /// Create a resource holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            state: RwLock::new(State {
                data: initial,
                pending: 0,
                error: None,
            }),
        }
    }

    /// Read the data without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        f(&state.data)
    }

    /// Whether at least one operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).pending > 0
    }

    /// Last error, kept until the next fetch or an explicit clear
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .error
            .clone()
    }

    /// Forget the last error
    pub fn clear_error(&self) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).error = None;
    }

    /// Mark an operation as started and clear the error
    ///
    /// `loading` stays true until every returned guard is dropped, including
    /// guards owned by a future that was dropped before completion.
    pub(crate) fn begin(&self) -> LoadingGuard<'_, T> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.pending += 1;
        state.error = None;
        LoadingGuard { resource: self }
    }

    pub(crate) fn replace(&self, data: T) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).data = data;
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut T)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        f(&mut state.data);
    }

    /// Record a backend failure, substituting `fallback` for an empty message
    pub(crate) fn fail(&self, message: String, fallback: &str) -> StoreError {
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        self.state.write().unwrap_or_else(|e| e.into_inner()).error = Some(message.clone());
        StoreError::Api(message)
    }
}

impl<T: Clone> Resource<T> {
    /// Clone of the current data
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.read(T::clone)
    }
}

/// Clears the loading flag when dropped
pub struct LoadingGuard<'a, T> {
    resource: &'a Resource<T>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self
            .resource
            .state
            .write()
            .unwrap_or_else(|e| e.into_inner());
        state.pending = state.pending.saturating_sub(1);
    }
}

/// Set of mutations currently running, keyed by operation and target
#[derive(Default)]
pub struct InFlight {
    keys: Mutex<HashSet<String>>,
}

impl InFlight {
    /// Claim `key`, failing if the same mutation is still running
    pub fn try_acquire(&self, key: impl Into<String>) -> StoreResult<InFlightGuard<'_>> {
        let key = key.into();
        let mut keys = self.keys.lock().unwrap_or_else(|e| e.into_inner());
        if !keys.insert(key.clone()) {
            return Err(StoreError::InFlight(key));
        }
        Ok(InFlightGuard { set: self, key })
    }

    /// Whether `key` is currently claimed
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}

/// Releases its key when dropped
pub struct InFlightGuard<'a> {
    set: &'a InFlight,
    key: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}
