//! # Data Loader Crate
//!
//! Owns the restaurant records that every search runs over.
//!
//! ## Main Components
//!
//! - **types**: `Restaurant`, `RestaurantDatabase`, `CuisineStats`
//! - **seed**: the built-in sample dataset
//! - **parser**: read JSON or `::`-delimited data files
//! - **index**: loading, validation and per-cuisine statistics
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RestaurantDatabase;
//! use std::path::Path;
//!
//! // Either the built-in sample data...
//! let db = RestaurantDatabase::seeded();
//!
//! // ...or a file on disk
//! let db = RestaurantDatabase::load_from_file(Path::new("data/restaurants.json"))?;
//!
//! for restaurant in db.get_restaurants() {
//!     println!("{} ({})", restaurant.name, restaurant.cuisine);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod seed;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use seed::seed_restaurants;
pub use types::{CuisineStats, Minutes, Restaurant, RestaurantDatabase};
