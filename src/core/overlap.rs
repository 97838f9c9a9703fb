use std::collections::BTreeSet;

/// Overlap returned when neither side states anything in a category
pub const BOTH_UNSTATED_OVERLAP: f64 = 1.0;

/// Overlap returned when only one side states something in a category
pub const ONE_UNSTATED_OVERLAP: f64 = 0.0;

/// Calculate the overlap (0-1) between two label sets of one category
///
/// - Both empty: 1.0. Two users with no stated preference are not penalized.
/// - Exactly one empty: 0.0. An unstated category never matches a stated one.
/// - Otherwise: Jaccard similarity, `|a ∩ b| / |a ∪ b|`.
///
/// The result is symmetric in `a` and `b`.
#[inline]
pub fn category_overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => BOTH_UNSTATED_OVERLAP,
        (true, false) | (false, true) => ONE_UNSTATED_OVERLAP,
        (false, false) => {
            let intersection = a.intersection(b).count();
            // |a ∪ b| = |a| + |b| - |a ∩ b|, always >= 1 here
            let union = a.len() + b.len() - intersection;
            intersection as f64 / union as f64
        }
    }
}

/// Labels present in both sets, in sorted order
pub fn shared_labels(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Vec<String> {
    a.intersection(b).cloned().collect()
}
