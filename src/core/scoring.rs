use crate::core::overlap::{category_overlap, shared_labels};
use crate::error::WeightsError;
use crate::models::{
    Category, CategoryOverlap, CompatibilityBreakdown, PreferenceProfile, ScoringWeights,
    DEFAULT_WEIGHTS,
};

/// Calculate the full compatibility breakdown between two profiles
///
/// Scoring formula:
/// ```text
/// score = round_half_up(100 * (
///     dietary_overlap * 0.35 +     # dietaryRestrictions
///     cuisine_overlap * 0.30 +     # cuisinePreferences
///     style_overlap   * 0.20 +     # diningStyles
///     food_overlap    * 0.15       # foodPreferences
/// ))
/// ```
///
/// Missing categories are empty sets. The result is symmetric in the two
/// profiles and always in `0..=100` for weights that pass
/// [`ScoringWeights::validate`].
pub fn calculate_compatibility(
    profile1: &PreferenceProfile,
    profile2: &PreferenceProfile,
    weights: &ScoringWeights,
) -> CompatibilityBreakdown {
    let categories: Vec<CategoryOverlap> = Category::ALL
        .iter()
        .map(|&category| {
            let a = profile1.labels(category);
            let b = profile2.labels(category);

            CategoryOverlap {
                category,
                overlap: category_overlap(a, b),
                weight: weights.weight(category),
                shared_labels: shared_labels(a, b),
            }
        })
        .collect();

    let weighted: f64 = categories.iter().map(|c| c.overlap * c.weight).sum();
    let score = to_score(weighted);

    tracing::trace!("Compatibility weighted={:.4} score={}", weighted, score);

    CompatibilityBreakdown {
        score,
        weighted,
        categories,
    }
}

/// Compatibility score (0-100) using the default weights
pub fn compatibility_score(profile1: &PreferenceProfile, profile2: &PreferenceProfile) -> u8 {
    calculate_compatibility(profile1, profile2, &DEFAULT_WEIGHTS).score
}

/// Absorbs f64 error in the weighted sum so exact halves round up
const ROUNDING_EPSILON: f64 = 1e-9;

/// Scale a weighted sum to 0-100 and round half up
#[inline]
fn to_score(weighted: f64) -> u8 {
    let scaled = (weighted * 100.0).clamp(0.0, 100.0);
    (scaled + 0.5 + ROUNDING_EPSILON).floor().min(100.0) as u8
}

/// Compatibility scorer bound to a fixed weight configuration
///
/// The weights are copied in at construction and never change afterwards,
/// so a single scorer can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    /// Create a scorer after checking that the weights are normalized
    pub fn try_new(weights: ScoringWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub const fn with_default_weights() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Compatibility score (0-100) between two profiles
    pub fn score(&self, profile1: &PreferenceProfile, profile2: &PreferenceProfile) -> u8 {
        self.breakdown(profile1, profile2).score
    }

    /// Score plus per-category overlaps and shared labels
    pub fn breakdown(
        &self,
        profile1: &PreferenceProfile,
        profile2: &PreferenceProfile,
    ) -> CompatibilityBreakdown {
        calculate_compatibility(profile1, profile2, &self.weights)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(
        dietary: &[&str],
        cuisine: &[&str],
        styles: &[&str],
        food: &[&str],
    ) -> PreferenceProfile {
        PreferenceProfile::default()
            .with_labels(Category::DietaryRestrictions, dietary.iter().copied())
            .with_labels(Category::CuisinePreferences, cuisine.iter().copied())
            .with_labels(Category::DiningStyles, styles.iter().copied())
            .with_labels(Category::FoodPreferences, food.iter().copied())
    }

    #[test]
    fn test_both_empty_profiles_score_100() {
        let empty = PreferenceProfile::default();
        assert_eq!(compatibility_score(&empty, &empty), 100);
    }

    #[test]
    fn test_one_stated_category_against_empty() {
        let p1 = create_test_profile(&[], &["Italian"], &[], &[]);
        let p2 = PreferenceProfile::default();

        assert_eq!(compatibility_score(&p1, &p2), 70);
        assert_eq!(compatibility_score(&p2, &p1), 70);
    }

    #[test]
    fn test_partial_cuisine_overlap() {
        let p1 = create_test_profile(&[], &["Italian", "Thai"], &[], &[]);
        let p2 = create_test_profile(&[], &["Thai", "Mexican"], &[], &[]);

        let breakdown = calculate_compatibility(&p1, &p2, &DEFAULT_WEIGHTS);

        assert_eq!(breakdown.score, 80);
        assert!((breakdown.weighted - 0.80).abs() < 1e-9);
        assert_eq!(breakdown.shared_labels(), vec!["Thai"]);
    }

    #[test]
    fn test_disjoint_profiles_score_zero() {
        let p1 = create_test_profile(&["Vegan"], &["Italian"], &["Fine Dining"], &["Slow Eater"]);
        let p2 = create_test_profile(&["Halal"], &["Thai"], &["Food Trucks"], &["Fast Eater"]);

        assert_eq!(compatibility_score(&p1, &p2), 0);
    }

    #[test]
    fn test_identical_profiles_score_100() {
        let p = create_test_profile(&["Vegetarian"], &["Thai", "Indian"], &["Casual"], &["Adventurous Eater"]);
        assert_eq!(compatibility_score(&p, &p), 100);
    }

    #[test]
    fn test_breakdown_lists_every_category() {
        let p1 = create_test_profile(&["Halal"], &[], &[], &[]);
        let p2 = create_test_profile(&["Halal"], &[], &[], &[]);

        let breakdown = Scorer::default().breakdown(&p1, &p2);

        assert_eq!(breakdown.categories.len(), 4);
        let categories: Vec<Category> = breakdown.categories.iter().map(|c| c.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(breakdown.categories[0].shared_labels, vec!["Halal"]);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            dietary_restrictions: 0.0,
            cuisine_preferences: 1.0,
            dining_styles: 0.0,
            food_preferences: 0.0,
        };
        let scorer = Scorer::try_new(weights).unwrap();
        let p1 = create_test_profile(&["Vegan"], &["Thai"], &[], &[]);
        let p2 = create_test_profile(&["Halal"], &["Thai"], &[], &[]);

        assert_eq!(scorer.score(&p1, &p2), 100);
    }

    #[test]
    fn test_rejects_unnormalized_weights() {
        let weights = ScoringWeights {
            dietary_restrictions: 0.5,
            cuisine_preferences: 0.5,
            dining_styles: 0.5,
            food_preferences: 0.0,
        };

        assert!(matches!(
            Scorer::try_new(weights),
            Err(WeightsError::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(to_score(0.625), 63);
        assert_eq!(to_score(0.004), 0);
        assert_eq!(to_score(0.999), 100);
        assert_eq!(to_score(0.0), 0);
        assert_eq!(to_score(1.0), 100);
    }

    #[test]
    fn test_half_way_score_rounds_up() {
        // 0.30 * 3/4 + 0.20 + 0.15 = 0.575, which f64 holds as 0.57499...
        let p1 = create_test_profile(&["Vegan"], &["Thai", "Korean", "Greek"], &[], &[]);
        let p2 = create_test_profile(&["Halal"], &["Thai", "Korean", "Greek", "Indian"], &[], &[]);

        assert_eq!(compatibility_score(&p1, &p2), 58);
        assert_eq!(compatibility_score(&p2, &p1), 58);
        assert_eq!(to_score(0.575), 58);
        assert_eq!(to_score(0.574), 57);
    }
}
