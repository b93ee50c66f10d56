//! Navigation and selection state shared by the views
//!
//! Constructed explicitly by whoever owns the session and passed to the views
//! that need it; there is no global instance.

use jowafrique_core::models::{DayOfWeek, PlanId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level view
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Progress,
    Favorites,
    Settings,
    Cart,
    Plans,
    Statistics,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Progress,
        Self::Favorites,
        Self::Settings,
        Self::Cart,
        Self::Plans,
        Self::Statistics,
    ];

    /// Identifier used in routes and config
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Progress => "progress",
            Self::Favorites => "favorites",
            Self::Settings => "settings",
            Self::Cart => "cart",
            Self::Plans => "plans",
            Self::Statistics => "statistics",
        }
    }

    /// French label shown in the navigation bar
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Accueil",
            Self::Progress => "Préparation",
            Self::Favorites => "Favoris",
            Self::Settings => "Paramètres",
            Self::Cart => "Courses",
            Self::Plans => "Plans",
            Self::Statistics => "Statistiques",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == lower)
            .ok_or_else(|| format!("unknown tab `{s}`"))
    }
}

/// Stage of the cooking countdown
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStage {
    #[default]
    PreCooking,
    Cooking,
    Delivery,
}

impl ProgressStage {
    /// Following stage; `Delivery` is final
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::PreCooking => Self::Cooking,
            Self::Cooking | Self::Delivery => Self::Delivery,
        }
    }
}

/// Selection state of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    active_tab: Tab,
    selected_plan_id: Option<PlanId>,
    selected_date: usize,
    progress_stage: ProgressStage,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Home,
            selected_plan_id: Some(1),
            selected_date: 2,
            progress_stage: ProgressStage::PreCooking,
        }
    }
}

impl AppState {
    /// State with the default selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tab
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch tab
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Selected plan, if any
    #[must_use]
    pub fn selected_plan_id(&self) -> Option<PlanId> {
        self.selected_plan_id
    }

    /// Select a plan or clear the selection
    pub fn set_selected_plan_id(&mut self, plan_id: Option<PlanId>) {
        self.selected_plan_id = plan_id;
    }

    /// Selected day, as a zero-based index from Monday
    #[must_use]
    pub fn selected_date(&self) -> usize {
        self.selected_date
    }

    /// Selected day of the week, when the index is in range
    #[must_use]
    pub fn selected_day(&self) -> Option<DayOfWeek> {
        DayOfWeek::from_index(self.selected_date)
    }

    /// Select a day by index
    pub fn set_selected_date(&mut self, index: usize) {
        self.selected_date = index;
    }

    /// Current cooking stage
    #[must_use]
    pub fn progress_stage(&self) -> ProgressStage {
        self.progress_stage
    }

    /// Set the cooking stage
    pub fn set_progress_stage(&mut self, stage: ProgressStage) {
        self.progress_stage = stage;
    }
}
