//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use data_loader::Restaurant;

/// Chains multiple filters together into a processing pipeline.
///
/// Every filter must pass for a restaurant to survive (logical AND).
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CuisineFilter::new("Italian"))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let filtered = pipeline.apply(db.get_restaurants().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the working set.
    ///
    /// An empty pipeline hands back its input untouched. Survivors keep
    /// their relative order.
    pub fn apply<'a>(&self, restaurants: Vec<&'a Restaurant>) -> Vec<&'a Restaurant> {
        let mut current = restaurants;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CuisineFilter, LocationFilter, MinimumRatingFilter};

    fn restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::new("Pizza Palace", "Italian", "New York", 4.5, Some(30)),
            Restaurant::new("Sushi World", "Japanese", "San Francisco", 4.7, Some(40)),
            Restaurant::new("Italian Bistro", "Italian", "Downtown", 4.0, Some(30)),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let restaurants = restaurants();

        let filtered = pipeline.apply(restaurants.iter().collect());
        assert_eq!(filtered.len(), 3);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(CuisineFilter::new("Japanese"));
        let restaurants = restaurants();

        let filtered = pipeline.apply(restaurants.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sushi World");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let pipeline = FilterPipeline::new()
            .add_filter(CuisineFilter::new("Italian"))
            .add_filter(LocationFilter::new("Downtown"))
            .add_filter(MinimumRatingFilter::new(4.0));
        let restaurants = restaurants();

        let filtered = pipeline.apply(restaurants.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Italian Bistro");
        assert_eq!(
            pipeline.filter_names(),
            vec!["CuisineFilter", "LocationFilter", "MinimumRatingFilter"]
        );
    }
}
