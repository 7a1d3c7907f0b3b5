//! Filter to keep restaurants in one location.

use super::eq_ignore_case;
use crate::traits::Filter;
use data_loader::Restaurant;

/// Keeps restaurants whose location equals the requested one, ignoring case.
pub struct LocationFilter {
    location: String,
}

impl LocationFilter {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_lowercase(),
        }
    }
}

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        eq_ignore_case(&restaurant.location, &self.location)
    }
}
