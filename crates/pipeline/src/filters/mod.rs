//! Filter implementations for the restaurant pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod cuisine;
pub mod delivery_speed;
pub mod location;
pub mod minimum_rating;

// Re-export for convenience
pub use cuisine::CuisineFilter;
pub use delivery_speed::MaxDeliverySpeedFilter;
pub use location::LocationFilter;
pub use minimum_rating::MinimumRatingFilter;

/// Case-insensitive equality against a needle that is already lower-cased.
pub(crate) fn eq_ignore_case(value: &str, lowered_needle: &str) -> bool {
    value.to_lowercase() == lowered_needle
}
