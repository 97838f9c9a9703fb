// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Category, CategoryOverlap, CompatibilityBreakdown, PreferenceProfile, ScoredMatch,
    ScoringWeights, DEFAULT_WEIGHTS, MAX_LABELS_PER_CATEGORY, WEIGHT_SUM_TOLERANCE,
};
pub use requests::FindMatchesRequest;
pub use responses::{FindMatchesResponse, ScoreResponse};
