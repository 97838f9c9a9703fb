use crate::models::Category;
use thiserror::Error;

/// Errors raised when a weight configuration cannot produce scores in `0..=100`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight for {category} must be a non-negative number, got {value}")]
    Negative { category: Category, value: f64 },

    #[error("scoring weights must sum to 1.0, got {sum}")]
    NotNormalized { sum: f64 },
}

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid scoring weights: {0}")]
    Weights(#[from] WeightsError),
}
