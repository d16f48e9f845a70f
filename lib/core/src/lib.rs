//! # Sommelier Core
//!
//! Core types shared by every Sommelier crate.
//!
//! - [`Dimension`] - The seven taste dimensions, in vector order
//! - [`TasteVector`] - A complete 7-dimensional taste vector
//! - [`Filters`] - Optional categorical and price constraints
//! - [`ParseResult`] - Target vector plus filters for one prompt
//! - [`RankingConfig`] - Result count, score floor and explanation switch
//!
//! ## Example
//!
//! ```rust
//! use sommelier_core::{Dimension, TasteVector, NEUTRAL_VALUE};
//!
//! let v = TasteVector::from_partial(&[0.8, 0.3]);
//! assert_eq!(v[Dimension::Tannin], 0.8);
//! assert_eq!(v[Dimension::Spice], NEUTRAL_VALUE);
//! ```

pub mod vector;
pub mod filter;
pub mod query;
pub mod config;
pub mod error;

pub use vector::{
    value_or_neutral, Dimension, TasteVector, Tasted, DEFAULT_TARGET, DIMENSIONS, NEUTRAL_VALUE,
};
pub use filter::Filters;
pub use query::ParseResult;
pub use config::RankingConfig;
pub use error::{Error, Result};
