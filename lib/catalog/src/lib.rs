//! # Sommelier Catalog
//!
//! In-memory wine catalog and store inventory.
//!
//! Catalogs are loaded from JSON documents holding either compact rows
//! (`[name, grape, country, colour, [vector]]`) or full wine objects.
//! Parsed [`Filters`](sommelier_core::Filters) pre-select wines, and the
//! survivors are ranked by taste similarity.
//!
//! ```rust
//! use sommelier_catalog::Catalog;
//! use sommelier_core::{Filters, ParseResult, TasteVector};
//! use sommelier_similarity::Ranker;
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[["Big Cab", "cabernet sauvignon", "United States", "Red", [0.8, 0.5, 0.1, 0.8, 0.65, 0.65, 0.5]]]"#,
//! ).unwrap();
//!
//! let query = ParseResult::new(TasteVector::default_target(), Filters::new().with_colour("Red"));
//! let results = catalog.recommend(&query, &Ranker::default());
//! assert_eq!(results[0].item.name, "Big Cab");
//! ```

pub mod wine;
pub mod filter;
pub mod source;
pub mod catalog;
pub mod store;

pub use wine::{CatalogRow, Wine};
pub use filter::Filter;
pub use catalog::Catalog;
pub use store::{Inventory, StockedWine, Store, StoreDistance};
