// src/rent/heuristic.rs

use crate::domain::listing::Listing;

/// Lowest monthly rent the heuristic will ever produce.
pub const HEURISTIC_RENT_FLOOR: f64 = 900.0;

/// Relative rent level per state. Unlisted states use 1.0.
const STATE_RENT_MULTIPLIERS: &[(&str, f64)] = &[
    ("CA", 1.45),
    ("NY", 1.4),
    ("WA", 1.25),
    ("MA", 1.3),
    ("TX", 1.0),
    ("FL", 1.05),
    ("GA", 0.95),
    ("OH", 0.85),
    ("PA", 0.9),
];

pub fn state_rent_multiplier(state: &str) -> f64 {
    STATE_RENT_MULTIPLIERS
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Closed-form monthly rent used when no comparable data is available.
pub fn heuristic_rent(listing: &Listing) -> f64 {
    let sqft = if listing.sqft > 0.0 { listing.sqft } else { 1200.0 };
    let base_per_sqft = 1.2 * state_rent_multiplier(&listing.state);
    let bedroom_boost = listing.bedrooms * 85.0;
    let bathroom_boost = listing.bathrooms * 60.0;
    // Newer homes rent for a bit more, capped both ways.
    let year_adjust = ((f64::from(listing.year_built) - 1980.0) * 2.0).clamp(-120.0, 180.0);

    let rent = sqft * base_per_sqft + bedroom_boost + bathroom_boost + year_adjust;
    rent.max(HEURISTIC_RENT_FLOOR)
}
