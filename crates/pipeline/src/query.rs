//! Search queries and the `search` entry point.
//!
//! A `SearchQuery` holds up to four optional criteria. Only the criteria
//! that are set become filters; unset ones are skipped entirely.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CuisineFilter, LocationFilter, MaxDeliverySpeedFilter, MinimumRatingFilter};
use data_loader::{Minutes, Restaurant};
use serde::{Deserialize, Serialize};

/// Optional criteria for narrowing a restaurant list.
///
/// An empty `cuisine` or `location` string counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
    pub max_delivery_speed: Option<Minutes>,
}

impl SearchQuery {
    /// A query with no criteria; it matches every restaurant.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn max_delivery_speed(mut self, max_minutes: Minutes) -> Self {
        self.max_delivery_speed = Some(max_minutes);
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.to_pipeline().is_empty()
    }

    /// Build the filter pipeline for this query.
    ///
    /// Filters run in a fixed order: cuisine, location, rating, delivery speed.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();

        if let Some(cuisine) = non_empty(&self.cuisine) {
            pipeline = pipeline.add_filter(CuisineFilter::new(cuisine));
        }
        if let Some(location) = non_empty(&self.location) {
            pipeline = pipeline.add_filter(LocationFilter::new(location));
        }
        if let Some(min_rating) = self.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if let Some(max_minutes) = self.max_delivery_speed {
            pipeline = pipeline.add_filter(MaxDeliverySpeedFilter::new(max_minutes));
        }

        pipeline
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Return the restaurants that satisfy every criterion set in `query`.
///
/// The result borrows from `restaurants` and keeps their order. No criteria
/// means every restaurant; no match means an empty list.
pub fn search<'a>(restaurants: &'a [Restaurant], query: &SearchQuery) -> Vec<&'a Restaurant> {
    search_with_pipeline(restaurants, &query.to_pipeline())
}

/// Run an already-built pipeline over `restaurants`, keeping their order.
pub fn search_with_pipeline<'a>(
    restaurants: &'a [Restaurant],
    pipeline: &FilterPipeline,
) -> Vec<&'a Restaurant> {
    let results = pipeline.apply(restaurants.iter().collect());
    tracing::debug!(
        "Search matched {} of {} restaurants",
        results.len(),
        restaurants.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::new("Pizza Palace", "Italian", "New York", 4.5, Some(30)),
            Restaurant::new("Taco Stand", "Mexican", "Chicago", 3.9, Some(20)),
            Restaurant::new("Dim Sum House", "Chinese", "Seattle", 4.6, Some(50)),
            Restaurant::new("Corner Deli", "American", "Downtown", 4.1, None),
        ]
    }

    #[test]
    fn test_unset_criteria_add_no_filters() {
        assert!(SearchQuery::new().is_empty());
        assert_eq!(SearchQuery::new().to_pipeline().len(), 0);
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let query = SearchQuery::new().cuisine("").location("");

        assert!(query.is_empty());
        assert_eq!(search(&restaurants(), &query).len(), 4);
    }

    #[test]
    fn test_pipeline_order() {
        let query = SearchQuery::new()
            .max_delivery_speed(30)
            .min_rating(4.0)
            .location("Downtown")
            .cuisine("Italian");

        assert_eq!(
            query.to_pipeline().filter_names(),
            vec![
                "CuisineFilter",
                "LocationFilter",
                "MinimumRatingFilter",
                "MaxDeliverySpeedFilter"
            ]
        );
    }

    #[test]
    fn test_search_rating_and_delivery() {
        let data = restaurants();
        let query = SearchQuery::new().min_rating(4.0).max_delivery_speed(40);

        let results = search(&data, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pizza Palace");
    }

    #[test]
    fn test_search_zero_rating_keeps_everything() {
        let data = restaurants();
        let results = search(&data, &SearchQuery::new().min_rating(0.0));

        assert_eq!(results.len(), data.len());
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let data = restaurants();
        let results = search(&data, &SearchQuery::new().cuisine("Ethiopian"));

        assert!(results.is_empty());
    }
}
