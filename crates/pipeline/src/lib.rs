//! Filtering pipeline for restaurant search.
//!
//! This crate provides:
//! - Filter trait and predicate implementations (cuisine, location,
//!   minimum rating, maximum delivery time)
//! - FilterPipeline for composing filters
//! - SearchQuery and the `search` function, the main filtering entry point
//! - RestaurantBrowser, a facade over a shared RestaurantDatabase
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::RestaurantDatabase;
//! use pipeline::{RestaurantBrowser, SearchQuery};
//! use std::sync::Arc;
//!
//! let browser = RestaurantBrowser::new(Arc::new(RestaurantDatabase::seeded()));
//!
//! let query = SearchQuery::new()
//!     .cuisine("Italian")
//!     .location("Downtown")
//!     .min_rating(4.0);
//!
//! for restaurant in browser.search(&query) {
//!     println!("{}", restaurant.name);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod browser;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{search, search_with_pipeline, SearchQuery};
pub use browser::RestaurantBrowser;
