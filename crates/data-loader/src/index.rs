//! Loading, validation and aggregate statistics for `RestaurantDatabase`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

const MAX_RATING: f32 = 5.0;

impl RestaurantDatabase {
    /// Load restaurants from a data file and validate them.
    ///
    /// `.json` files are read as a JSON array, anything else as the
    /// `::`-delimited line format (see [`crate::parser`]).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading restaurants from {}", path.display());

        let restaurants = parser::parse_file(path)?;
        let db = Self::from_restaurants(restaurants);
        db.validate()?;

        tracing::info!("Loaded {} restaurants", db.len());
        Ok(db)
    }

    /// Validate data integrity
    ///
    /// Checks that:
    /// - name, cuisine and location are non-empty
    /// - rating is a finite number within 0.0 - 5.0
    ///
    /// Duplicate names are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        let mut seen_names = HashSet::new();

        for (idx, restaurant) in self.restaurants.iter().enumerate() {
            for (field, value) in [
                ("name", &restaurant.name),
                ("cuisine", &restaurant.cuisine),
                ("location", &restaurant.location),
            ] {
                if value.trim().is_empty() {
                    return Err(DataLoadError::ValidationError(format!(
                        "restaurant #{} has an empty {}",
                        idx + 1,
                        field
                    )));
                }
            }

            if !restaurant.rating.is_finite()
                || restaurant.rating < 0.0
                || restaurant.rating > MAX_RATING
            {
                return Err(DataLoadError::InvalidValue {
                    field: "rating".to_string(),
                    value: restaurant.rating.to_string(),
                });
            }

            if !seen_names.insert(restaurant.name.to_lowercase()) {
                tracing::warn!("Duplicate restaurant name: {}", restaurant.name);
            }
        }
        Ok(())
    }

    /// Per-cuisine statistics, in order of each cuisine's first appearance.
    ///
    /// Cuisines are grouped case-insensitively and reported under the
    /// spelling seen first.
    pub fn cuisine_stats(&self) -> Vec<(String, CuisineStats)> {
        let mut groups: Vec<(String, Vec<&Restaurant>)> = Vec::new();
        for restaurant in &self.restaurants {
            let key = restaurant.cuisine.to_lowercase();
            match groups
                .iter_mut()
                .find(|(cuisine, _)| cuisine.to_lowercase() == key)
            {
                Some((_, members)) => members.push(restaurant),
                None => groups.push((restaurant.cuisine.clone(), vec![restaurant])),
            }
        }

        groups
            .into_par_iter()
            .map(|(cuisine, members)| (cuisine, compute_cuisine_stats(&members)))
            .collect()
    }
}

fn compute_cuisine_stats(members: &[&Restaurant]) -> CuisineStats {
    let restaurant_count = members.len() as u32;
    let avg_rating = if restaurant_count > 0 {
        let total: f32 = members.iter().map(|r| r.rating).sum();
        total / restaurant_count as f32
    } else {
        0.0
    };
    let fastest_delivery = members.iter().filter_map(|r| r.delivery_speed).min();

    CuisineStats {
        restaurant_count,
        avg_rating,
        fastest_delivery,
    }
}
