//! Weekly plans store

use crate::error::StoreResult;
use crate::resource::{InFlight, Resource};
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{NewPlanRequest, PlanId, WeeklyPlan};
use std::sync::Arc;
use tracing::info;

const LOAD_FAILED: &str = "Erreur lors du chargement des plans";
const CREATE_FAILED: &str = "Erreur lors de la création du plan";
const DELETE_FAILED: &str = "Erreur lors de la suppression du plan";

/// All weekly plans, newest first after a local create
pub struct PlansStore {
    api: Arc<dyn MealPlannerApi>,
    plans: Resource<Vec<WeeklyPlan>>,
    in_flight: InFlight,
}

impl PlansStore {
    /// Create an empty store without contacting the backend
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            plans: Resource::default(),
            in_flight: InFlight::default(),
        }
    }

    /// Create the store and fetch once
    ///
    /// A failed fetch is kept in [`error`](Self::error).
    pub async fn load(api: Arc<dyn MealPlannerApi>) -> Self {
        let store = Self::new(api);
        let _ = store.fetch().await;
        store
    }

    /// Current plans
    #[must_use]
    pub fn plans(&self) -> Vec<WeeklyPlan> {
        self.plans.snapshot()
    }

    /// Plan with the given id, if held locally
    #[must_use]
    pub fn find(&self, plan_id: PlanId) -> Option<WeeklyPlan> {
        self.plans
            .read(|plans| plans.iter().find(|p| p.id == plan_id).cloned())
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.plans.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.plans.error()
    }

    /// Forget the last error
    pub fn clear_error(&self) {
        self.plans.clear_error();
    }

    /// Replace the plans with the backend's list
    pub async fn fetch(&self) -> StoreResult<()> {
        let _loading = self.plans.begin();
        match self.api.list_plans().await {
            ApiResponse::Success(plans) => {
                self.plans.replace(plans);
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.plans.fail(message, LOAD_FAILED)),
        }
    }

    /// Alias of [`fetch`](Self::fetch)
    pub async fn refetch(&self) -> StoreResult<()> {
        self.fetch().await
    }

    /// Create a plan and prepend it locally
    ///
    /// Fields the backend does not echo back are filled from `request`.
    pub async fn create(&self, request: &NewPlanRequest) -> StoreResult<WeeklyPlan> {
        let _claim = self
            .in_flight
            .try_acquire(format!("create_plan:{}", request.plan_name))?;
        let _loading = self.plans.begin();

        match self.api.create_plan(request).await {
            ApiResponse::Success(mut plan) => {
                if plan.plan_name.is_empty() {
                    plan.plan_name.clone_from(&request.plan_name);
                }
                if plan.week_start_date.is_empty() {
                    plan.week_start_date.clone_from(&request.week_start_date);
                }
                info!(plan_id = plan.id, name = %plan.plan_name, "Plan created");
                self.plans.update(|plans| plans.insert(0, plan.clone()));
                Ok(plan)
            }
            ApiResponse::Failure(message) => Err(self.plans.fail(message, CREATE_FAILED)),
        }
    }

    /// Delete a plan and drop it locally
    pub async fn remove(&self, plan_id: PlanId) -> StoreResult<()> {
        let _claim = self.in_flight.try_acquire(format!("remove_plan:{plan_id}"))?;
        let _loading = self.plans.begin();

        match self.api.delete_plan(plan_id).await {
            ApiResponse::Success(()) => {
                info!(plan_id, "Plan deleted");
                self.plans.update(|plans| plans.retain(|p| p.id != plan_id));
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.plans.fail(message, DELETE_FAILED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::testing::{plan, FakeBackend};
    use jowafrique_api_client::BACKEND_UNAVAILABLE;

    #[tokio::test]
    async fn test_load_fetches_plans() {
        let fake = FakeBackend::with_plans(vec![plan(1, "Semaine 1"), plan(2, "Semaine 2")]);
        let store = PlansStore::load(fake.clone()).await;

        assert_eq!(store.plans().len(), 2);
        assert!(!store.loading());
        assert_eq!(store.error(), None);
        assert_eq!(fake.calls(), vec!["list_plans"]);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let fake = FakeBackend::failing(BACKEND_UNAVAILABLE);
        let store = PlansStore::load(fake).await;

        assert!(store.plans().is_empty());
        assert!(!store.loading());
        assert_eq!(store.error().as_deref(), Some(BACKEND_UNAVAILABLE));
    }

    #[tokio::test]
    async fn test_create_prepends_and_fills_name() {
        let fake = FakeBackend::with_plans(vec![plan(1, "Semaine 1")]);
        let store = PlansStore::load(fake.clone()).await;

        let created = store
            .create(&NewPlanRequest::new("Semaine 2", "2024-03-25"))
            .await
            .unwrap();

        assert_eq!(created.plan_name, "Semaine 2");
        assert_eq!(created.week_start_date, "2024-03-25");
        let plans = store.plans();
        assert_eq!(plans[0].id, created.id);
        assert_eq!(plans[1].id, 1);

        store.refetch().await.unwrap();
        let ids: Vec<_> = store.plans().iter().map(|p| p.id).collect();
        assert!(ids.contains(&created.id));
    }

    #[tokio::test]
    async fn test_remove_drops_plan() {
        let fake = FakeBackend::with_plans(vec![plan(1, "Semaine 1")]);
        let store = PlansStore::load(fake.clone()).await;

        store.remove(1).await.unwrap();

        assert!(store.plans().is_empty());
        store.fetch().await.unwrap();
        assert!(store.plans().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_plan_reports_failure() {
        let fake = FakeBackend::with_plans(vec![plan(1, "Semaine 1")]);
        let store = PlansStore::load(fake).await;

        let err = store.remove(42).await.unwrap_err();

        assert_eq!(err, StoreError::Api("Plan non trouvé".into()));
        assert_eq!(store.plans().len(), 1);
        assert_eq!(store.error().as_deref(), Some("Plan non trouvé"));
    }

    #[tokio::test]
    async fn test_duplicate_remove_is_rejected() {
        let fake = FakeBackend::with_plans(vec![plan(1, "Semaine 1")]);
        let store = PlansStore::load(fake.clone()).await;
        fake.hold();

        let (first, second) = tokio::join!(store.remove(1), async {
            let second = store.remove(1).await;
            fake.release();
            second
        });

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(StoreError::InFlight("remove_plan:1".into())));
        assert_eq!(store.error(), None);
        assert_eq!(
            fake.calls().iter().filter(|c| *c == "delete_plan").count(),
            1
        );
    }
}
