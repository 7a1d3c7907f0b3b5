//! Filter to keep restaurants serving one cuisine.

use super::eq_ignore_case;
use crate::traits::Filter;
use data_loader::Restaurant;

/// Keeps restaurants whose cuisine equals the requested one, ignoring case.
pub struct CuisineFilter {
    cuisine: String,
}

impl CuisineFilter {
    /// Create a new CuisineFilter.
    ///
    /// # Arguments
    /// * `cuisine` - Cuisine to match (e.g. "Italian"), any casing
    pub fn new(cuisine: &str) -> Self {
        Self {
            cuisine: cuisine.to_lowercase(),
        }
    }
}

impl Filter for CuisineFilter {
    fn name(&self) -> &str {
        "CuisineFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        eq_ignore_case(&restaurant.cuisine, &self.cuisine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuisine_filter() {
        let restaurants = vec![
            Restaurant::new("Pizza Palace", "Italian", "New York", 4.5, Some(30)),
            Restaurant::new("Sushi World", "Japanese", "San Francisco", 4.7, Some(40)),
            Restaurant::new("Trattoria", "ITALIAN", "Boston", 3.8, None),
        ];

        let filter = CuisineFilter::new("italian");
        let filtered = filter.apply(restaurants.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Pizza Palace");
        assert_eq!(filtered[1].name, "Trattoria");
    }

    #[test]
    fn test_cuisine_filter_is_exact_match() {
        let restaurant = Restaurant::new("Sushi Express", "Japanese Fusion", "Downtown", 4.2, Some(30));

        assert!(!CuisineFilter::new("Japanese").matches(&restaurant));
    }
}
