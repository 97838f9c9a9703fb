// Integration tests for Tablemate Algo

use tablemate_algo::config::Settings;
use tablemate_algo::core::{Matcher, Scorer};
use tablemate_algo::models::{
    Candidate, Category, FindMatchesRequest, PreferenceProfile, ScoringWeights,
};

fn create_test_profile(dietary: &[&str], cuisine: &[&str], styles: &[&str], food: &[&str]) -> PreferenceProfile {
    PreferenceProfile::default()
        .with_labels(Category::DietaryRestrictions, dietary.iter().copied())
        .with_labels(Category::CuisinePreferences, cuisine.iter().copied())
        .with_labels(Category::DiningStyles, styles.iter().copied())
        .with_labels(Category::FoodPreferences, food.iter().copied())
}

fn create_candidate(id: &str, preferences: PreferenceProfile) -> Candidate {
    Candidate {
        user_id: id.to_string(),
        name: Some(format!("User {}", id)),
        preferences,
    }
}

#[test]
fn test_integration_end_to_end_matching() {
    let matcher = Matcher::with_default_weights();
    let preferences = create_test_profile(
        &["Vegetarian"],
        &["Italian", "Thai"],
        &["Casual"],
        &["Adventurous Eater"],
    );

    let candidates = vec![
        create_candidate("1", preferences.clone()), // Identical
        create_candidate("2", create_test_profile(&["Vegetarian"], &["Thai"], &["Casual"], &[])),
        create_candidate("3", create_test_profile(&["Halal"], &["Mexican"], &["Fine Dining"], &["Slow Eater"])),
        create_candidate("4", PreferenceProfile::default()),
        create_candidate("current_user", preferences.clone()), // Self
    ];

    let result = matcher.find_matches("current_user", &preferences, candidates, &[], 10);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.matches.len(), 4);

    // Sorted by score, descending
    for pair in result.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }

    assert_eq!(result.matches[0].user_id, "1");
    assert_eq!(result.matches[0].match_score, 100);
    assert!(result.matches.iter().all(|m| m.user_id != "current_user"));

    // Candidate 3 differs on every axis
    let disjoint = result.matches.iter().find(|m| m.user_id == "3").unwrap();
    assert_eq!(disjoint.match_score, 0);
    assert!(disjoint.shared_labels.is_empty());
}

#[test]
fn test_integration_request_document() {
    let request: FindMatchesRequest = serde_json::from_str(
        r#"{
            "userId": "u1",
            "preferences": {"cuisinePreferences": ["Thai", "Korean"]},
            "candidates": [
                {"userId": "u2", "preferences": {"cuisinePreferences": ["Thai"]}},
                {"userId": "u3", "preferences": {"cuisinePreferences": ["Thai", "Korean"]}},
                {"userId": "u4"}
            ],
            "excludeUserIds": ["u4"],
            "limit": 5
        }"#,
    )
    .unwrap();

    let matcher = Matcher::default();
    let result = matcher.find_matches(
        &request.user_id,
        &request.preferences,
        request.candidates,
        &request.exclude_user_ids,
        request.limit.unwrap_or(20) as usize,
    );

    let ids: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["u3", "u2"]);
    assert_eq!(result.matches[1].match_score, 85);
}

#[test]
fn test_integration_settings_drive_scoring() {
    let mut settings = Settings::default();
    settings.scoring.weights.dietary_restrictions = 1.0;
    settings.scoring.weights.cuisine_preferences = 0.0;
    settings.scoring.weights.dining_styles = 0.0;
    settings.scoring.weights.food_preferences = 0.0;
    settings.matching.min_score = 50;

    let matcher = settings.matcher().unwrap();
    let preferences = create_test_profile(&["Kosher"], &["Thai"], &[], &[]);

    let candidates = vec![
        create_candidate("match", create_test_profile(&["Kosher"], &["Mexican"], &[], &[])),
        create_candidate("miss", create_test_profile(&["Vegan"], &["Thai"], &[], &[])),
    ];

    let result = matcher.find_matches("me", &preferences, candidates, &[], 10);

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].user_id, "match");
    assert_eq!(result.matches[0].match_score, 100);
}

#[test]
fn test_integration_negative_weight_rejected() {
    let weights = ScoringWeights {
        dietary_restrictions: -0.1,
        cuisine_preferences: 0.6,
        dining_styles: 0.3,
        food_preferences: 0.2,
    };

    assert!(Scorer::try_new(weights).is_err());
}
