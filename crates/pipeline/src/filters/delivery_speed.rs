//! Filter on how quickly a restaurant delivers.

use crate::traits::Filter;
use data_loader::{Minutes, Restaurant};

/// Keeps restaurants that deliver within `max_minutes`.
///
/// Restaurants without a published delivery time never pass.
pub struct MaxDeliverySpeedFilter {
    max_minutes: Minutes,
}

impl MaxDeliverySpeedFilter {
    pub fn new(max_minutes: Minutes) -> Self {
        Self { max_minutes }
    }
}

impl Filter for MaxDeliverySpeedFilter {
    fn name(&self) -> &str {
        "MaxDeliverySpeedFilter"
    }

    fn matches(&self, restaurant: &Restaurant) -> bool {
        restaurant
            .delivery_speed
            .is_some_and(|minutes| minutes <= self.max_minutes)
    }
}
