//! Built-in sample dataset.

use crate::types::{Restaurant, RestaurantDatabase};

impl RestaurantDatabase {
    /// A database holding the built-in sample restaurants.
    pub fn seeded() -> Self {
        Self::from_restaurants(seed_restaurants())
    }
}

/// The eight sample restaurants, in their canonical order.
pub fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("Pizza Palace", "Italian", "New York", 4.5, Some(30)),
        Restaurant::new("Sushi World", "Japanese", "San Francisco", 4.7, Some(40)),
        Restaurant::new("Burger Shack", "American", "Los Angeles", 4.2, Some(25)),
        Restaurant::new("Taco Stand", "Mexican", "Chicago", 3.9, Some(20)),
        Restaurant::new("Vegan Delight", "Vegan", "Austin", 4.8, Some(35)),
        Restaurant::new("Dim Sum House", "Chinese", "Seattle", 4.6, Some(50)),
        Restaurant::new("Italian Bistro", "Italian", "Downtown", 4.0, Some(30)),
        Restaurant::new("Sushi Express", "Japanese", "Downtown", 4.2, Some(30)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let db = RestaurantDatabase::seeded();
        let names: Vec<&str> = db.get_restaurants().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Pizza Palace",
                "Sushi World",
                "Burger Shack",
                "Taco Stand",
                "Vegan Delight",
                "Dim Sum House",
                "Italian Bistro",
                "Sushi Express",
            ]
        );
    }

    #[test]
    fn test_seed_passes_validation() {
        assert!(RestaurantDatabase::seeded().validate().is_ok());
    }
}
