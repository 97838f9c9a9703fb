use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Matcher, Scorer};
use crate::error::SettingsError;
use crate::models::{ScoringWeights, DEFAULT_WEIGHTS};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_dietary_weight")]
    pub dietary_restrictions: f64,
    #[serde(default = "default_cuisine_weight")]
    pub cuisine_preferences: f64,
    #[serde(default = "default_dining_style_weight")]
    pub dining_styles: f64,
    #[serde(default = "default_food_weight")]
    pub food_preferences: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            dietary_restrictions: default_dietary_weight(),
            cuisine_preferences: default_cuisine_weight(),
            dining_styles: default_dining_style_weight(),
            food_preferences: default_food_weight(),
        }
    }
}

fn default_dietary_weight() -> f64 { DEFAULT_WEIGHTS.dietary_restrictions }
fn default_cuisine_weight() -> f64 { DEFAULT_WEIGHTS.cuisine_preferences }
fn default_dining_style_weight() -> f64 { DEFAULT_WEIGHTS.dining_styles }
fn default_food_weight() -> f64 { DEFAULT_WEIGHTS.food_preferences }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            dietary_restrictions: config.dietary_restrictions,
            cuisine_preferences: config.cuisine_preferences,
            dining_styles: config.dining_styles,
            food_preferences: config.food_preferences,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Candidates scoring below this are dropped from rankings
    #[serde(default)]
    pub min_score: u8,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: 0,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TABLEMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TABLEMATE__MATCHING__MIN_SCORE -> matching.min_score
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Validated, immutable weight configuration
    pub fn weights(&self) -> Result<ScoringWeights, SettingsError> {
        let weights = ScoringWeights::from(&self.scoring.weights);
        weights.validate()?;
        Ok(weights)
    }

    /// Build the matcher described by these settings
    pub fn matcher(&self) -> Result<Matcher, SettingsError> {
        let scorer = Scorer::try_new(self.weights()?)?;
        Ok(Matcher::new(scorer, self.matching.min_score))
    }

    /// Clamp a requested limit to the configured maximum
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit) as usize
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TABLEMATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
