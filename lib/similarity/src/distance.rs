//! Taste-vector similarity
//!
//! Scores are `1 - d / √7` where `d` is the Euclidean distance between two
//! points of the unit cube `[0,1]^7`. The normalization is fixed, not
//! adaptive. Missing candidate dimensions read as the neutral value.

use sommelier_core::{value_or_neutral, Dimension, TasteVector};

/// Largest distance between two points of `[0,1]^7` (√7, rounded)
pub const MAX_TASTE_DISTANCE: f32 = 2.6458;

/// Euclidean distance over the seven dimensions
pub fn euclidean_distance(target: &TasteVector, candidate: &[f32]) -> f32 {
    Dimension::ALL
        .iter()
        .map(|d| {
            let diff = target[*d] - value_or_neutral(candidate, *d);
            diff * diff
        })
        .sum::<f32>()
        .sqrt()
}

/// Similarity in `[0, 1]`, 1.0 for identical vectors
pub fn similarity(target: &TasteVector, candidate: &[f32]) -> f32 {
    let distance = euclidean_distance(target, candidate);
    (1.0 - distance / MAX_TASTE_DISTANCE).max(0.0)
}
