//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! predicate-style filters to be applied to a working set of restaurants.

use data_loader::Restaurant;

/// Core trait for filtering restaurants.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// A filter only decides whether a single record passes; `apply` narrows a
/// whole working set and keeps the survivors in their original order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `restaurant` satisfies this predicate.
    fn matches(&self, restaurant: &Restaurant) -> bool;

    /// Keep only the restaurants that satisfy this predicate.
    fn apply<'a>(&self, restaurants: Vec<&'a Restaurant>) -> Vec<&'a Restaurant> {
        restaurants
            .into_iter()
            .filter(|restaurant| self.matches(restaurant))
            .collect()
    }
}
