//! Core domain types for the restaurant dataset.
//!
//! A `Restaurant` is a flat record; `RestaurantDatabase` owns every record
//! and hands out borrowed views of them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Delivery time in whole minutes
pub type Minutes = u32;

// =============================================================================
// Restaurant
// =============================================================================

/// A single restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name, used as a loose identifier
    pub name: String,
    pub cuisine: String,
    pub location: String,
    /// Average rating on a 0.0 - 5.0 scale
    pub rating: f32,
    /// Typical delivery time. `None` when the restaurant doesn't publish one.
    #[serde(default)]
    pub delivery_speed: Option<Minutes>,
}

impl Restaurant {
    /// Build a record; `delivery_speed` is `None` when unpublished.
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        location: impl Into<String>,
        rating: f32,
        delivery_speed: Option<Minutes>,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            location: location.into(),
            rating,
            delivery_speed,
        }
    }
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate figures for all restaurants sharing a cuisine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuisineStats {
    pub restaurant_count: u32,
    pub avg_rating: f32,
    /// Lowest published delivery time, if any restaurant publishes one
    pub fastest_delivery: Option<Minutes>,
}

// =============================================================================
// RestaurantDatabase - The In-Memory Store
// =============================================================================

/// Holds every restaurant record in insertion order.
///
/// The database is filled once (from the seed data or a file) and only read
/// afterwards, so getters return references into it.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDatabase {
    pub(crate) restaurants: Vec<Restaurant>,
}

impl RestaurantDatabase {
    /// Creates a new, empty database
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
        }
    }

    /// Wrap an already-built list of records, keeping their order.
    pub fn from_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// All restaurants, in the order they were inserted
    pub fn get_restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Look up a restaurant by name, ignoring case.
    ///
    /// Names are not enforced unique; the first match wins.
    pub fn get_restaurant(&self, name: &str) -> Option<&Restaurant> {
        let needle = name.to_lowercase();
        self.restaurants
            .iter()
            .find(|r| r.name.to_lowercase() == needle)
    }

    /// Append a restaurant. Used while loading.
    pub fn insert_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
