use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

/// Maximum number of labels accepted per category at the input boundary
pub const MAX_LABELS_PER_CATEGORY: u64 = 64;

/// One of the four independent axes used to compare two diners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    DietaryRestrictions,
    CuisinePreferences,
    DiningStyles,
    FoodPreferences,
}

impl Category {
    /// All categories, in scoring order
    pub const ALL: [Category; 4] = [
        Category::DietaryRestrictions,
        Category::CuisinePreferences,
        Category::DiningStyles,
        Category::FoodPreferences,
    ];

    /// Wire name of the category, matching the profile field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DietaryRestrictions => "dietaryRestrictions",
            Category::CuisinePreferences => "cuisinePreferences",
            Category::DiningStyles => "diningStyles",
            Category::FoodPreferences => "foodPreferences",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured food-preference profile of a single user
///
/// Every field is optional on the wire. A missing field deserializes to an
/// empty set, which the scorer treats the same as an explicitly empty list.
/// Labels are compared by exact, case-sensitive equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PreferenceProfile {
    #[serde(rename = "dietaryRestrictions", default)]
    #[validate(length(max = MAX_LABELS_PER_CATEGORY))]
    pub dietary_restrictions: BTreeSet<String>,
    #[serde(rename = "cuisinePreferences", default)]
    #[validate(length(max = MAX_LABELS_PER_CATEGORY))]
    pub cuisine_preferences: BTreeSet<String>,
    #[serde(rename = "diningStyles", default)]
    #[validate(length(max = MAX_LABELS_PER_CATEGORY))]
    pub dining_styles: BTreeSet<String>,
    #[serde(rename = "foodPreferences", default)]
    #[validate(length(max = MAX_LABELS_PER_CATEGORY))]
    pub food_preferences: BTreeSet<String>,
}

impl PreferenceProfile {
    /// Labels stated for one category
    pub fn labels(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::DietaryRestrictions => &self.dietary_restrictions,
            Category::CuisinePreferences => &self.cuisine_preferences,
            Category::DiningStyles => &self.dining_styles,
            Category::FoodPreferences => &self.food_preferences,
        }
    }

    /// Mutable access to the labels of one category
    fn labels_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::DietaryRestrictions => &mut self.dietary_restrictions,
            Category::CuisinePreferences => &mut self.cuisine_preferences,
            Category::DiningStyles => &mut self.dining_styles,
            Category::FoodPreferences => &mut self.food_preferences,
        }
    }

    /// Builder-style helper that adds labels to a category
    pub fn with_labels<I, S>(mut self, category: Category, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels_mut(category)
            .extend(labels.into_iter().map(Into::into));
        self
    }

    /// True when no category holds any label
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.labels(*c).is_empty())
    }
}

/// Per-category weights used to combine overlaps into a single score
///
/// The four weights must be non-negative and sum to 1.0 for the score to
/// land in `0..=100`. See [`ScoringWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub dietary_restrictions: f64,
    pub cuisine_preferences: f64,
    pub dining_styles: f64,
    pub food_preferences: f64,
}

/// Default process-wide weight configuration
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    dietary_restrictions: 0.35,
    cuisine_preferences: 0.30,
    dining_styles: 0.20,
    food_preferences: 0.15,
};

/// Allowed drift of the weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringWeights {
    /// Weight assigned to a category
    #[inline]
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::DietaryRestrictions => self.dietary_restrictions,
            Category::CuisinePreferences => self.cuisine_preferences,
            Category::DiningStyles => self.dining_styles,
            Category::FoodPreferences => self.food_preferences,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    /// Check that every weight is non-negative and that they sum to 1.0
    pub fn validate(&self) -> Result<(), crate::error::WeightsError> {
        for category in Category::ALL {
            let value = self.weight(category);
            if !value.is_finite() || value < 0.0 {
                return Err(crate::error::WeightsError::Negative { category, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(crate::error::WeightsError::NotNormalized { sum });
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Overlap of two profiles within a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOverlap {
    pub category: Category,
    pub overlap: f64,
    pub weight: f64,
    #[serde(rename = "sharedLabels")]
    pub shared_labels: Vec<String>,
}

/// Full result of comparing two profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub score: u8,
    /// Weighted sum before scaling and rounding, in `0.0..=1.0`
    pub weighted: f64,
    pub categories: Vec<CategoryOverlap>,
}

impl CompatibilityBreakdown {
    /// Every shared label across all categories, in category order
    pub fn shared_labels(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.shared_labels.iter().cloned())
            .collect()
    }
}

/// A potential dining companion supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Candidate {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub preferences: PreferenceProfile,
}

/// Scored companion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "sharedLabels")]
    pub shared_labels: Vec<String>,
}
