//! # Sommelier
//!
//! Turns a free-text wine request into a taste target plus filters, scores
//! candidate wines by taste similarity and explains each match in a short
//! tasting note.
//!
//! ## Quick Start
//!
//! ```rust
//! use sommelier::prelude::*;
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     ["Big Cab", "cabernet sauvignon", "United States", "Red", [0.8, 0.5, 0.1, 0.8, 0.65, 0.65, 0.5]],
//!     ["Crisp White", "sauvignon blanc", "New Zealand", "White", [0.05, 0.85, 0.1, 0.4, 0.75, 0.1, 0.3]]
//! ]"#).unwrap();
//!
//! let query = parse_prompt("a bold red, cabernet, under $30");
//! assert_eq!(query.filters.colour.as_deref(), Some("Red"));
//!
//! let results = catalog.recommend(&query, &Ranker::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].item.name, "Big Cab");
//! ```
//!
//! ## Crate Structure
//!
//! - `sommelier-core` - Taste vectors, filters, ranking config and errors
//! - `sommelier-lexicon` - Ordered rule tables and the prompt parser
//! - `sommelier-similarity` - Similarity, explanations, ranking and geo distance
//! - `sommelier-catalog` - Wine catalog and store inventory
//!
//! ## Pipeline
//!
//! ```text
//! prompt ──> PromptParser ──> ParseResult { target, filters }
//!                                     │
//!                     Catalog::select (filters)
//!                                     │
//!                     Ranker::rank (similarity, top_k)
//!                                     │
//!                     match_reason ──> "bold tannins, dry, fruit-forward"
//! ```

// Re-export core types
pub use sommelier_core::{
    Dimension, TasteVector, Tasted,
    Filters, ParseResult, RankingConfig,
    Error, Result,
    DEFAULT_TARGET, DIMENSIONS, NEUTRAL_VALUE,
};

// Re-export the parser
pub use sommelier_lexicon::{parse_prompt, PromptParser, RuleTables};

// Re-export scoring
pub use sommelier_similarity::{
    distance_miles, match_reason, similarity,
    RankedResult, Ranker, RankingStats,
};

// Re-export catalog
pub use sommelier_catalog::{Catalog, Filter, Inventory, StockedWine, Store, Wine};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Dimension, TasteVector, Tasted,
        Filters, ParseResult, RankingConfig,
        Error, Result,
        parse_prompt, PromptParser,
        similarity, match_reason, distance_miles,
        Ranker, RankedResult,
        Catalog, Inventory, Wine, Filter,
    };
}

/// Rule-table building blocks for custom vocabularies
pub mod lexicon {
    pub use sommelier_lexicon::{CategoricalRule, Origin, Pattern, RuleTable, TasteRule};
}
