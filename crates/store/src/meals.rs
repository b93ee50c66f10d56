//! Meals of the selected plan, and the current meal

use crate::error::{StoreError, StoreResult};
use crate::resource::{InFlight, Resource};
use jowafrique_api_client::{ApiResponse, MealPlannerApi};
use jowafrique_core::models::{Meal, MealId, MealPatch, PlanId};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

const LOAD_FAILED: &str = "Erreur lors du chargement des repas";
const ADD_FAILED: &str = "Erreur lors de l'ajout du repas";
const UPDATE_FAILED: &str = "Erreur lors de la mise à jour du repas";
const DELETE_FAILED: &str = "Erreur lors de la suppression du repas";
const CURRENT_FAILED: &str = "Erreur lors du chargement du repas actuel";

/// Meals of one plan
///
/// The plan id is the store's dependency: changing it drops the held meals
/// and refetches, and no call is made while it is `None`.
pub struct MealsStore {
    api: Arc<dyn MealPlannerApi>,
    plan_id: RwLock<Option<PlanId>>,
    meals: Resource<Vec<Meal>>,
    in_flight: InFlight,
}

impl MealsStore {
    /// Create an empty store without contacting the backend
    pub fn new(api: Arc<dyn MealPlannerApi>, plan_id: Option<PlanId>) -> Self {
        Self {
            api,
            plan_id: RwLock::new(plan_id),
            meals: Resource::default(),
            in_flight: InFlight::default(),
        }
    }

    /// Create the store and fetch once
    pub async fn load(api: Arc<dyn MealPlannerApi>, plan_id: Option<PlanId>) -> Self {
        let store = Self::new(api, plan_id);
        let _ = store.fetch().await;
        store
    }

    /// Plan the meals belong to
    #[must_use]
    pub fn plan_id(&self) -> Option<PlanId> {
        *self.plan_id.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Current meals
    #[must_use]
    pub fn meals(&self) -> Vec<Meal> {
        self.meals.snapshot()
    }

    /// Meal with the given id, if held locally
    #[must_use]
    pub fn find(&self, meal_id: MealId) -> Option<Meal> {
        self.meals
            .read(|meals| meals.iter().find(|m| m.id == meal_id).cloned())
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.meals.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.meals.error()
    }

    /// Forget the last error
    pub fn clear_error(&self) {
        self.meals.clear_error();
    }

    /// Switch to another plan, refetching when it changed
    pub async fn set_plan(&self, plan_id: Option<PlanId>) -> StoreResult<()> {
        {
            let mut current = self.plan_id.write().unwrap_or_else(|e| e.into_inner());
            if *current == plan_id {
                return Ok(());
            }
            *current = plan_id;
        }
        self.meals.replace(Vec::new());
        self.fetch().await
    }

    /// Replace the meals with the backend's list for the plan
    pub async fn fetch(&self) -> StoreResult<()> {
        let Some(plan_id) = self.plan_id() else {
            debug!("No plan selected, skipping meals fetch");
            return Ok(());
        };

        let _loading = self.meals.begin();
        match self.api.plan_meals(plan_id).await {
            ApiResponse::Success(meals) => {
                // the plan may have changed while the request was running
                if self.plan_id() == Some(plan_id) {
                    self.meals.replace(meals);
                }
                Ok(())
            }
            ApiResponse::Failure(message) if self.plan_id() == Some(plan_id) => {
                Err(self.meals.fail(message, LOAD_FAILED))
            }
            ApiResponse::Failure(message) => Err(StoreError::Api(message)),
        }
    }

    /// Alias of [`fetch`](Self::fetch)
    pub async fn refetch(&self) -> StoreResult<()> {
        self.fetch().await
    }

    /// Add a meal to the plan, then refetch the whole list
    pub async fn add(&self, meal: &MealPatch) -> StoreResult<Meal> {
        let plan_id = self.plan_id().ok_or(StoreError::NoPlanSelected)?;
        let key = format!(
            "add_meal:{plan_id}:{}",
            meal.name.as_deref().unwrap_or_default()
        );
        let _claim = self.in_flight.try_acquire(key)?;

        match self.api.add_meal(plan_id, meal).await {
            ApiResponse::Success(created) => {
                info!(plan_id, meal_id = created.id, "Meal added");
                // the meal exists now, a failed refetch only lands in `error`
                if let Err(e) = self.fetch().await {
                    warn!(plan_id, error = %e, "Refetch after add failed");
                }
                Ok(self.find(created.id).unwrap_or(created))
            }
            ApiResponse::Failure(message) => Err(self.meals.fail(message, ADD_FAILED)),
        }
    }

    /// Send a partial update and merge it into the local meal
    pub async fn update(&self, meal_id: MealId, patch: &MealPatch) -> StoreResult<()> {
        let _claim = self.in_flight.try_acquire(format!("update_meal:{meal_id}"))?;

        match self.api.update_meal(meal_id, patch).await {
            ApiResponse::Success(_) => {
                info!(meal_id, "Meal updated");
                self.meals.update(|meals| {
                    if let Some(meal) = meals.iter_mut().find(|m| m.id == meal_id) {
                        patch.apply(meal);
                    }
                });
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.meals.fail(message, UPDATE_FAILED)),
        }
    }

    /// Delete a meal and drop it locally
    pub async fn remove(&self, meal_id: MealId) -> StoreResult<()> {
        let _claim = self.in_flight.try_acquire(format!("remove_meal:{meal_id}"))?;

        match self.api.delete_meal(meal_id).await {
            ApiResponse::Success(()) => {
                info!(meal_id, "Meal deleted");
                self.meals.update(|meals| meals.retain(|m| m.id != meal_id));
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.meals.fail(message, DELETE_FAILED)),
        }
    }
}

/// The meal scheduled for now
pub struct CurrentMealStore {
    api: Arc<dyn MealPlannerApi>,
    meal: Resource<Option<Meal>>,
}

impl CurrentMealStore {
    /// Create an empty store without contacting the backend
    pub fn new(api: Arc<dyn MealPlannerApi>) -> Self {
        Self {
            api,
            meal: Resource::default(),
        }
    }

    /// Create the store and fetch once
    pub async fn load(api: Arc<dyn MealPlannerApi>) -> Self {
        let store = Self::new(api);
        let _ = store.fetch().await;
        store
    }

    /// Current meal, if fetched
    #[must_use]
    pub fn meal(&self) -> Option<Meal> {
        self.meal.snapshot()
    }

    /// Whether an operation is running
    #[must_use]
    pub fn loading(&self) -> bool {
        self.meal.loading()
    }

    /// Last error message
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.meal.error()
    }

    /// Fetch the current meal
    pub async fn fetch(&self) -> StoreResult<()> {
        let _loading = self.meal.begin();
        match self.api.current_meal().await {
            ApiResponse::Success(meal) => {
                self.meal.replace(Some(meal));
                Ok(())
            }
            ApiResponse::Failure(message) => Err(self.meal.fail(message, CURRENT_FAILED)),
        }
    }

    /// Alias of [`fetch`](Self::fetch)
    pub async fn refetch(&self) -> StoreResult<()> {
        self.fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{meal, FakeBackend, FakeState};

    #[tokio::test]
    async fn test_no_plan_means_no_call() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé")]);
        let store = MealsStore::load(fake.clone(), None).await;

        assert!(store.meals().is_empty());
        assert!(!store.loading());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_set_plan_refetches_on_change() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé"), meal(11, "Eru")]);
        let store = MealsStore::load(fake.clone(), None).await;

        store.set_plan(Some(1)).await.unwrap();
        assert_eq!(store.meals().len(), 2);

        store.set_plan(Some(1)).await.unwrap();
        assert_eq!(fake.calls(), vec!["plan_meals"]);

        store.set_plan(Some(2)).await.unwrap();
        assert!(store.meals().is_empty());
        assert_eq!(store.plan_id(), Some(2));
    }

    #[tokio::test]
    async fn test_add_refetches() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé")]);
        let store = MealsStore::load(fake.clone(), Some(1)).await;

        let created = store
            .add(&MealPatch::default().with_name("Poulet DG"))
            .await
            .unwrap();

        assert_eq!(created.name, "Poulet DG");
        assert_eq!(store.meals().len(), 2);
        assert_eq!(
            fake.calls(),
            vec!["plan_meals", "add_meal", "plan_meals"]
        );
    }

    #[tokio::test]
    async fn test_add_succeeds_when_refetch_fails() {
        let fake = FakeBackend::new(FakeState {
            meals: [(1, vec![meal(10, "Ndolé")])].into(),
            fail_after_write: Some("Erreur réseau".into()),
            ..FakeState::default()
        });
        let store = MealsStore::load(fake.clone(), Some(1)).await;

        let created = store
            .add(&MealPatch::default().with_name("Poulet DG"))
            .await
            .unwrap();

        assert_eq!(created.id, 101);
        assert_eq!(fake.state().meals[&1].len(), 2);
        assert_eq!(store.error().as_deref(), Some("Erreur réseau"));
        assert_eq!(store.meals().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_fetch_failure_is_dropped() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé")]);
        let store = MealsStore::load(fake.clone(), Some(1)).await;
        fake.hold();

        let (stale, ()) = tokio::join!(store.fetch(), async {
            store.set_plan(None).await.unwrap();
            fake.state().failure = Some("Erreur réseau".into());
            fake.release();
        });

        assert_eq!(stale, Err(StoreError::Api("Erreur réseau".into())));
        assert_eq!(store.plan_id(), None);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_add_without_plan() {
        let fake = FakeBackend::new(FakeState::default());
        let store = MealsStore::new(fake.clone(), None);

        let err = store.add(&MealPatch::default()).await.unwrap_err();

        assert_eq!(err, StoreError::NoPlanSelected);
        assert_eq!(store.error(), None);
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_locally_without_drift() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé"), meal(11, "Eru")]);
        let store = MealsStore::load(fake.clone(), Some(1)).await;

        store.update(10, &MealPatch::rating(4)).await.unwrap();

        let local = store.meals();
        assert_eq!(local[0].rating, Some(4));
        assert_eq!(local[0].name, "Ndolé");
        assert_eq!(local[1].rating, None);

        store.refetch().await.unwrap();
        assert_eq!(store.meals(), local);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_state() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé")]);
        let store = MealsStore::load(fake, Some(1)).await;

        let err = store.update(99, &MealPatch::rating(4)).await.unwrap_err();

        assert_eq!(err, StoreError::Api("Repas non trouvé".into()));
        assert_eq!(store.meals()[0].rating, None);
        assert_eq!(store.error().as_deref(), Some("Repas non trouvé"));
    }

    #[tokio::test]
    async fn test_remove() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé"), meal(11, "Eru")]);
        let store = MealsStore::load(fake, Some(1)).await;

        store.remove(10).await.unwrap();
        assert_eq!(store.meals().len(), 1);

        assert!(store.remove(10).await.is_err());
        assert_eq!(store.meals().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_update_is_rejected() {
        let fake = FakeBackend::with_meals(1, vec![meal(10, "Ndolé")]);
        let store = MealsStore::load(fake.clone(), Some(1)).await;
        fake.hold();

        let patch = MealPatch::rating(5);
        let (first, second) = tokio::join!(store.update(10, &patch), async {
            let second = store.update(10, &patch).await;
            fake.release();
            second
        });

        assert!(first.is_ok());
        assert_eq!(second, Err(StoreError::InFlight("update_meal:10".into())));
    }

    #[tokio::test]
    async fn test_current_meal() {
        let fake = FakeBackend::new(FakeState {
            current: Some(meal(3, "Poisson braisé")),
            ..FakeState::default()
        });
        let store = CurrentMealStore::load(fake).await;
        assert_eq!(store.meal().map(|m| m.name), Some("Poisson braisé".into()));
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_current_meal_missing() {
        let fake = FakeBackend::new(FakeState::default());
        let store = CurrentMealStore::load(fake).await;
        assert_eq!(store.meal(), None);
        assert_eq!(store.error().as_deref(), Some("Aucun repas actuel trouvé"));
    }
}
