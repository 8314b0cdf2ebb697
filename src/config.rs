use std::collections::BTreeMap;
use std::env;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pantrymatch_matching::{
    DEFAULT_LIMIT, DEFAULT_TIME_BUDGET, MEALS_PER_DAY, ScoreWeights, ScoringOptions,
    SubstitutionCatalog,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Extra catalog entries, layered onto the built-in catalog.
    #[serde(default)]
    pub substitutions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    #[serde(default = "default_time_budget")]
    pub default_time_budget: u32,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: f64,
    #[serde(default)]
    pub weights: ScoreWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_time_budget: default_time_budget(),
            default_limit: default_limit(),
            meals_per_day: default_meals_per_day(),
            weights: ScoreWeights::default(),
        }
    }
}

fn default_time_budget() -> u32 {
    DEFAULT_TIME_BUDGET
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_meals_per_day() -> f64 {
    MEALS_PER_DAY
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTRYMATCH__MATCHING__DEFAULT_LIMIT, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("matching.default_time_budget", DEFAULT_TIME_BUDGET as i64)?
            .set_default("matching.default_limit", DEFAULT_LIMIT as i64)?
            .set_default("matching.meals_per_day", MEALS_PER_DAY)?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults and environment still apply without it
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTRYMATCH")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.scoring_options()
            .validate()
            .map_err(|e| format!("Invalid matching configuration: {e}"))?;

        if self.matching.default_limit < 1 {
            return Err("Matching default_limit must be at least 1".to_string());
        }

        if let Some((ingredient, _)) = self
            .substitutions
            .iter()
            .find(|(ingredient, _)| ingredient.trim().is_empty())
        {
            return Err(format!("Substitution key {ingredient:?} must not be blank"));
        }

        Ok(())
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            weights: self.matching.weights,
            meals_per_day: self.matching.meals_per_day,
        }
    }

    /// Built-in catalog with the configured entries applied on top.
    pub fn catalog(&self) -> SubstitutionCatalog {
        let mut catalog = SubstitutionCatalog::builtin().clone();
        catalog.extend(&self.substitutions);
        catalog
    }
}
