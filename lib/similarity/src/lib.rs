//! # Sommelier Similarity
//!
//! Scores catalog items against a taste target and explains the match.
//!
//! ## Features
//!
//! - **Similarity**: normalized Euclidean similarity over the seven taste dimensions
//! - **Explanations**: short tasting-note reasons built from the closest dimensions
//! - **Ranking**: score floor, `top_k` truncation and stable ordering
//! - **Geo**: haversine distance for store lookups
//!
//! ## Example
//!
//! ```rust
//! use sommelier_core::TasteVector;
//! use sommelier_similarity::{match_reason, similarity};
//!
//! let target = TasteVector::new([0.8, 0.5, 0.1, 0.8, 0.7, 0.6, 0.5]);
//! let wine = [0.8, 0.4, 0.1, 0.9, 0.7, 0.6, 0.3];
//!
//! let score = similarity(&target, &wine);
//! assert!(score > 0.9);
//! assert_eq!(match_reason(&target, &wine), "bold tannins, dry, fruit-forward");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Target    │────>│  Similarity │────>│   Ranker    │
//! │  (vector)   │     │ (distance)  │     │  (top_k)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │   Explain   │
//!                                         │  (reasons)  │
//!                                         └─────────────┘
//! ```

pub mod distance;
pub mod explain;
pub mod rank;
pub mod geo;

// Re-export main types for convenience
pub use distance::{euclidean_distance, similarity, MAX_TASTE_DISTANCE};
pub use explain::{closest_dimensions, descriptor, descriptors, match_reason, DimensionMatch, Level};
pub use rank::{RankedResult, Ranker, RankingStats};
pub use geo::{distance_miles, EARTH_RADIUS_MILES};
