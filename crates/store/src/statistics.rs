//! Aggregate statistics store

use crate::error::StoreResult;
use crate::resource::Resource;
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::Statistics;
use std::sync::Arc;

const LOAD_FAILED: &str = "Erreur lors du chargement des statistiques";

/// Read-only statistics, refreshed by refetching
pub struct StatisticsStore {
    api: Arc<dyn MealPlannerApi>,
    statistics: Resource<Option<Statistics>>,
}

impl StatisticsStore {
    /// Create an empty store without contacting the backend
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            statistics: Resource::default(),
        }
    }

    /// Create the store and fetch once
    pub async fn load(api: Arc<dyn MealPlannerApi>) -> Self {
        let store = Self::new(api);
        let _ = store.fetch().await;
        store
    }

    /// Statistics, if fetched
    #[must_use]
    pub fn statistics(&self) -> Option<Statistics> {
        self.statistics.snapshot()
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.statistics.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.statistics.error()
    }

    /// Fetch the statistics
    pub async fn fetch(&self) -> StoreResult<()> {
        let _loading = self.statistics.begin();
        match self.api.statistics().await {
            ApiResponse::Success(statistics) => {
                self.statistics.replace(Some(statistics));
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.statistics.fail(message, LOAD_FAILED)),
        }
    }

    /// Alias of [`fetch`](Self::fetch)
    pub async fn refetch(&self) -> StoreResult<()> {
        self.fetch().await
    }
}
