//! Restaurant browsing over a shared database.
//!
//! `RestaurantBrowser` is the front door callers use. Every method ends up in
//! [`search_with_pipeline`], so there is exactly one filtering code path.
//!
//! The multi-criteria forms treat an empty cuisine or location as unset.
//! The one-field forms always compare, so `search_by_cuisine("")` only
//! matches restaurants with an empty cuisine.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CuisineFilter, LocationFilter};
use crate::query::{search, search_with_pipeline, SearchQuery};
use data_loader::{Minutes, Restaurant, RestaurantDatabase};
use std::sync::Arc;

/// Searches a shared, read-only `RestaurantDatabase`.
#[derive(Debug, Clone)]
pub struct RestaurantBrowser {
    database: Arc<RestaurantDatabase>,
}

impl RestaurantBrowser {
    /// Create a new RestaurantBrowser.
    ///
    /// # Arguments
    /// * `database` - Shared reference to the restaurant records
    pub fn new(database: Arc<RestaurantDatabase>) -> Self {
        Self { database }
    }

    /// The database this browser reads from
    pub fn database(&self) -> &RestaurantDatabase {
        &self.database
    }

    /// Run a query against the whole database.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Restaurant> {
        tracing::debug!("Searching restaurants: {:?}", query);
        search(self.database.get_restaurants(), query)
    }

    /// Search with any combination of the four criteria; `None` skips one.
    pub fn search_restaurants(
        &self,
        cuisine: Option<&str>,
        location: Option<&str>,
        min_rating: Option<f32>,
        max_delivery_speed: Option<Minutes>,
    ) -> Vec<&Restaurant> {
        let query = SearchQuery {
            cuisine: cuisine.map(str::to_string),
            location: location.map(str::to_string),
            min_rating,
            max_delivery_speed,
        };
        self.search(&query)
    }

    /// Restaurants serving exactly `cuisine`, ignoring case. An empty string is compared too.
    pub fn search_by_cuisine(&self, cuisine: &str) -> Vec<&Restaurant> {
        self.run(FilterPipeline::new().add_filter(CuisineFilter::new(cuisine)))
    }

    pub fn search_by_location(&self, location: &str) -> Vec<&Restaurant> {
        self.run(FilterPipeline::new().add_filter(LocationFilter::new(location)))
    }

    /// Restaurants rated `min_rating` or higher.
    pub fn search_by_rating(&self, min_rating: f32) -> Vec<&Restaurant> {
        self.search(&SearchQuery::new().min_rating(min_rating))
    }

    fn run(&self, pipeline: FilterPipeline) -> Vec<&Restaurant> {
        tracing::debug!("Searching restaurants with {:?}", pipeline.filter_names());
        search_with_pipeline(self.database.get_restaurants(), &pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> RestaurantBrowser {
        RestaurantBrowser::new(Arc::new(RestaurantDatabase::seeded()))
    }

    #[test]
    fn test_search_by_cuisine() {
        let browser = browser();
        let results = browser.search_by_cuisine("Italian");

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.cuisine == "Italian"));
    }

    #[test]
    fn test_search_by_location() {
        let browser = browser();
        let results = browser.search_by_location("Downtown");

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.location == "Downtown"));
    }

    #[test]
    fn test_search_by_rating() {
        let browser = browser();
        let results = browser.search_by_rating(4.0);

        assert_eq!(results.len(), 7);
        assert!(results.iter().all(|r| r.rating >= 4.0));
    }

    #[test]
    fn test_search_restaurants_forwards_every_criterion() {
        let browser = browser();

        let results = browser.search_restaurants(Some("Japanese"), None, Some(4.0), Some(35));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Sushi Express");

        let all = browser.search_restaurants(None, None, None, None);
        assert_eq!(all.len(), browser.database().len());
    }

    #[test]
    fn test_one_field_search_compares_empty_string() {
        let browser = browser();

        assert!(browser.search_by_cuisine("").is_empty());
        assert!(browser.search_by_location("").is_empty());
        assert_eq!(browser.search_restaurants(Some(""), None, None, None).len(), 8);
        assert_eq!(browser.search_restaurants(None, Some(""), None, None).len(), 8);
    }

    #[test]
    fn test_clones_share_database() {
        let browser = browser();
        let other = browser.clone();

        assert!(std::ptr::eq(browser.database(), other.database()));
    }
}
