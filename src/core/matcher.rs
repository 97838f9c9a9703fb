use crate::core::scoring::Scorer;
use crate::models::{Candidate, PreferenceProfile, ScoredMatch};
use std::collections::HashSet;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Ranks potential dining companions for one user
///
/// # Pipeline Stages
/// 1. Exclusion of the requesting user and caller-supplied IDs
/// 2. Compatibility scoring
/// 3. Minimum score threshold
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    scorer: Scorer,
    min_score: u8,
}

impl Matcher {
    pub fn new(scorer: Scorer, min_score: u8) -> Self {
        Self { scorer, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            scorer: Scorer::with_default_weights(),
            min_score: 0,
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Find the most compatible companions for a user
    ///
    /// # Arguments
    /// * `user_id` - The requesting user, never returned as a match
    /// * `preferences` - The requesting user's preference profile
    /// * `candidates` - Potential companions supplied by the caller
    /// * `exclude_user_ids` - Additional users to leave out
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult sorted by score (descending), ties broken by user ID
    pub fn find_matches(
        &self,
        user_id: &str,
        preferences: &PreferenceProfile,
        candidates: Vec<Candidate>,
        exclude_user_ids: &[String],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let excluded: HashSet<&str> = exclude_user_ids.iter().map(String::as_str).collect();

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            // Stage 1: Exclusions
            .filter(|candidate| candidate.user_id != user_id)
            .filter(|candidate| !excluded.contains(candidate.user_id.as_str()))
            // Stage 2 & 3: Score and threshold
            .filter_map(|candidate| {
                let breakdown = self.scorer.breakdown(preferences, &candidate.preferences);

                if breakdown.score >= self.min_score {
                    Some(ScoredMatch {
                        shared_labels: breakdown.shared_labels(),
                        match_score: breakdown.score,
                        user_id: candidate.user_id,
                        name: candidate.name,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Sort by score (descending) and then by user ID (ascending)
        scored_matches.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        tracing::debug!(
            "Scored {} of {} candidates for user {}",
            scored_matches.len(),
            total_candidates,
            user_id
        );

        scored_matches.truncate(limit);

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
