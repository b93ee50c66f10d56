//! Settings resolution and shared command state
//!
//! Each setting is taken from the command line first, then the environment
//! (both handled by clap), then the configuration file, then the default.

use anyhow::{Context as _, Result};
use indicatif::ProgressBar;
use jowafrique_api_client::{ClientConfig, JowClient, MealPlannerApi};
use jowafrique_cli::output::OutputFormat;
use jowafrique_cli::progress;
use jowafrique_core::config::{Config, SearchConfig};
use jowafrique_search::SearchOptions;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Overrides collected from flags and environment variables
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// What every command needs
pub struct Context {
    pub client: JowClient,
    pub api: Arc<dyn MealPlannerApi>,
    pub format: OutputFormat,
    pub search: SearchConfig,
}

impl Context {
    pub fn new(config: &Config, overrides: Overrides, format: OutputFormat) -> Result<Self> {
        let client_config = client_config(config, overrides);
        tracing::debug!(base_url = %client_config.base_url, "Resolved backend");

        let client = JowClient::with_config(client_config).context("Invalid backend settings")?;
        let api: Arc<dyn MealPlannerApi> = Arc::new(client.clone());

        Ok(Self {
            client,
            api,
            format,
            search: config.schema.search.clone(),
        })
    }

    /// Spinner on stderr, hidden for JSON output
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.is_json() {
            progress::hidden()
        } else {
            progress::spinner(message)
        }
    }

    pub fn is_json(&self) -> bool {
        self.format.is_json()
    }

    /// Search quiet period from the `[search]` section
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Meal search options from the `[search]` section
    pub fn meal_search_options(&self) -> Result<SearchOptions> {
        Ok(SearchOptions::meals()
            .with_threshold(self.search.meal_threshold)?
            .with_min_match_char_length(self.search.min_match_char_length))
    }

    /// Plan search options from the `[search]` section
    pub fn plan_search_options(&self) -> Result<SearchOptions> {
        Ok(SearchOptions::plans()
            .with_threshold(self.search.plan_threshold)?
            .with_min_match_char_length(self.search.min_match_char_length))
    }
}

/// Load the configuration file, if any
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Ok(Config::load(path)?)
}

fn client_config(config: &Config, overrides: Overrides) -> ClientConfig {
    let api = &config.schema.api;
    let mut client_config = ClientConfig::default()
        .with_base_url(api.base_url.clone())
        .with_timeout(Duration::from_secs(api.timeout_secs));

    if let Some(url) = overrides.api_url {
        client_config = client_config.with_base_url(url);
    }
    if let Some(secs) = overrides.timeout_secs {
        client_config = client_config.with_timeout(Duration::from_secs(secs));
    }
    client_config
}
