use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tracing_subscriber::EnvFilter;
use weekcart_mealplan::{ActiveSlots, MealPlanError};

use crate::error::{KitchenError, Result};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Meal slots shown when a new week plan is created
    #[serde(default = "default_active_slots")]
    pub active_slots: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            active_slots: default_active_slots(),
        }
    }
}

fn default_active_slots() -> Vec<String> {
    ["Breakfast", "Lunch", "Dinner", "Snacks"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl PlannerConfig {
    pub fn active_slots(&self) -> std::result::Result<ActiveSlots, MealPlanError> {
        ActiveSlots::parse(&self.active_slots)
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WEEKCART__PLANNER__ACTIVE_SLOTS, etc.)
    /// 2. Config file specified by path, or WEEKCART_CONFIG
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> std::result::Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("WEEKCART_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional; defaults cover every key.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKCART")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("planner.active_slots"),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.planner.active_slots()?;

        EnvFilter::try_new(&self.observability.log_level).map_err(|e| {
            KitchenError::Validation(format!(
                "invalid log level '{}': {e}",
                self.observability.log_level
            ))
        })?;

        Ok(())
    }
}
