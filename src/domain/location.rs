// src/domain/location.rs

use crate::domain::listing::Listing;

/// A search location as typed by the user: a ZIP code, a state
/// abbreviation, or a city with an optional state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Zip(String),
    State(String),
    City { city: String, state: Option<String> },
}

/// Classifies a raw location string.
///
/// `"76131"` is a ZIP, `"tx"` is a state, and anything else is a city,
/// where `"Fort Worth, TX"` also pins the state.
pub fn parse_location(raw: &str) -> Location {
    let normalized = raw.trim().to_uppercase();

    if normalized.len() == 5 && normalized.chars().all(|c| c.is_ascii_digit()) {
        return Location::Zip(normalized);
    }
    if normalized.len() == 2 && normalized.chars().all(|c| c.is_ascii_alphabetic()) {
        return Location::State(normalized);
    }

    match normalized.split_once(',') {
        Some((city, state)) => {
            let state: String = state.trim().chars().take(2).collect();
            Location::City {
                city: city.trim().to_string(),
                state: Some(state).filter(|s| !s.is_empty()),
            }
        }
        None => Location::City {
            city: normalized,
            state: None,
        },
    }
}

impl Location {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Location::Zip(zip) => listing.zip_code == *zip,
            Location::State(state) => listing.state == *state,
            Location::City { city, state } => {
                let city_match = listing.city.trim().to_uppercase() == *city;
                match state {
                    Some(state) => city_match && listing.state == *state,
                    None => city_match,
                }
            }
        }
    }
}
