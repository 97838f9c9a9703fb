//! Tablemate Algo - Compatibility scoring engine for the Tablemate dining app
//!
//! This library scores how well two users suit each other as dining
//! companions, based on their dietary restrictions, cuisine preferences,
//! dining styles and general food habits. Scoring is pure and deterministic:
//! callers supply both preference profiles and receive an integer in `0..=100`.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, category_overlap, compatibility_score, Matcher, MatchResult, Scorer};
pub use crate::error::{SettingsError, WeightsError};
pub use crate::models::{
    Candidate, Category, CompatibilityBreakdown, FindMatchesRequest, FindMatchesResponse,
    PreferenceProfile, ScoredMatch, ScoringWeights, DEFAULT_WEIGHTS,
};
