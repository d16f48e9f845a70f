//! Match explanations
//!
//! Describes a candidate in terms of the dimensions where it sits closest
//! to the target, e.g. `"bold tannins, full-bodied, oaky"`.

use serde::Serialize;
use sommelier_core::{value_or_neutral, Dimension, TasteVector};

/// Candidate values at or above this read as high
pub const HIGH_THRESHOLD: f32 = 0.65;
/// Candidate values at or below this read as low
pub const LOW_THRESHOLD: f32 = 0.30;
/// Number of closest dimensions described
pub const MAX_DESCRIPTORS: usize = 3;

/// Coarse reading of a dimension value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Mid,
    Low,
}

impl Level {
    pub fn classify(value: f32) -> Self {
        if value >= HIGH_THRESHOLD {
            Level::High
        } else if value <= LOW_THRESHOLD {
            Level::Low
        } else {
            Level::Mid
        }
    }
}

/// Tasting-note phrase for a dimension at a level
pub fn descriptor(dimension: Dimension, level: Level) -> &'static str {
    use Dimension::*;
    use Level::*;
    match (dimension, level) {
        (Tannin, High) => "bold tannins",
        (Tannin, Low) => "soft tannins",
        (Tannin, Mid) => "moderate tannins",
        (Acidity, High) => "bright acidity",
        (Acidity, Low) => "mellow",
        (Acidity, Mid) => "balanced acidity",
        (Sweetness, High) => "sweet",
        (Sweetness, Low) => "dry",
        (Sweetness, Mid) => "off-dry",
        (Body, High) => "full-bodied",
        (Body, Low) => "light-bodied",
        (Body, Mid) => "medium-bodied",
        (Fruit, High) => "fruit-forward",
        (Fruit, Low) => "earthy",
        (Fruit, Mid) => "moderate fruit",
        (Oak, High) => "oaky",
        (Oak, Low) => "unoaked",
        (Oak, Mid) => "lightly oaked",
        (Spice, High) => "spicy",
        (Spice, Low) => "mild",
        (Spice, Mid) => "hint of spice",
    }
}

/// One dimension's contribution to an explanation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionMatch {
    pub dimension: Dimension,
    /// `|target - candidate|`, smaller is a better match
    pub difference: f32,
    pub level: Level,
    pub descriptor: &'static str,
}

/// All seven dimensions ordered from closest to furthest.
/// Equal differences keep vector order.
pub fn closest_dimensions(target: &TasteVector, candidate: &[f32]) -> Vec<DimensionMatch> {
    let mut matches: Vec<DimensionMatch> = Dimension::ALL
        .iter()
        .map(|d| {
            let value = value_or_neutral(candidate, *d);
            let level = Level::classify(value);
            DimensionMatch {
                dimension: *d,
                difference: (target[*d] - value).abs(),
                level,
                descriptor: descriptor(*d, level),
            }
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| a.difference.total_cmp(&b.difference));
    matches
}

/// Up to three distinct descriptors for the closest dimensions
pub fn descriptors(target: &TasteVector, candidate: &[f32]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(MAX_DESCRIPTORS);
    for m in closest_dimensions(target, candidate).into_iter().take(MAX_DESCRIPTORS) {
        if !out.contains(&m.descriptor) {
            out.push(m.descriptor);
        }
    }
    out
}

/// Comma-joined match reason
pub fn match_reason(target: &TasteVector, candidate: &[f32]) -> String {
    descriptors(target, candidate).join(", ")
}
