// Core algorithm exports
pub mod matcher;
pub mod overlap;
pub mod scoring;

pub use matcher::{Matcher, MatchResult};
pub use overlap::{category_overlap, shared_labels};
pub use scoring::{calculate_compatibility, compatibility_score, Scorer};
