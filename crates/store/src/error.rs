//! Store error types

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend call failed; the message is also kept as the store's error
    #[error("{0}")]
    Api(String),

    /// The operation needs a selected plan
    #[error("Aucun plan sélectionné")]
    NoPlanSelected,

    /// The same mutation on the same target is still running
    #[error("Opération déjà en cours: {0}")]
    InFlight(String),
}

impl StoreError {
    /// Check if this error came from the backend
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}
