//! Filter to ensure a minimum quality threshold.

use crate::traits::Filter;
use data_loader::Restaurant;

/// Removes restaurants rated below a threshold.
///
/// The threshold is inclusive: a restaurant rated exactly `min_rating` passes.
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest acceptable rating on the 0.0 - 5.0 scale
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        restaurant.rating >= self.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rating_filter() {
        let restaurants = vec![
            Restaurant::new("Pizza Palace", "Italian", "New York", 4.5, Some(30)),
            Restaurant::new("Taco Stand", "Mexican", "Chicago", 3.9, Some(20)),
            Restaurant::new("Italian Bistro", "Italian", "Downtown", 4.0, Some(30)),
        ];

        let filter = MinimumRatingFilter::new(4.0);
        let filtered = filter.apply(restaurants.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Pizza Palace");
        assert_eq!(filtered[1].name, "Italian Bistro");
    }
}
