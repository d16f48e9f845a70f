//! # Sommelier Lexicon
//!
//! Deterministic, ordered pattern matching from free text to a structured
//! taste query.
//!
//! ## How it works
//!
//! 1. The prompt is lower-cased (for matching only)
//! 2. Every matching taste rule contributes target values; each dimension
//!    takes the mean of its contributions
//! 3. Colour, grape, region and price tables are scanned independently,
//!    each stopping at its first match
//!
//! ## Example
//!
//! ```rust
//! use sommelier_lexicon::parse_prompt;
//!
//! let result = parse_prompt("red wine, bordeaux, under $30");
//! assert_eq!(result.filters.colour.as_deref(), Some("Red"));
//! assert_eq!(result.filters.region.as_deref(), Some("Bordeaux"));
//! assert_eq!(result.filters.price_max, Some(30.0));
//! ```

pub mod rules;
pub mod tables;
pub mod parser;

pub use rules::{CategoricalRule, Pattern, RuleTable, TasteRule};
pub use tables::{Origin, PriceExtractor, RuleTables, OPEN_PRICE_CEILING};
pub use parser::{parse_prompt, PromptParser};
