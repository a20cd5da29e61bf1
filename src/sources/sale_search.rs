// src/sources/sale_search.rs

use crate::analysis::{ListingFilters, Preferences};
use crate::domain::location::{parse_location, Location};
use crate::realtor::{HttpMethod, SearchPurpose, SearchRequest};
use serde_json::{json, Map, Value};

/// "FORT WORTH" -> "Fort Worth"
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Server-side filters that mirror the underwriting constraints, so the
/// provider returns fewer listings we would discard anyway.
pub fn sale_filters(filters: &ListingFilters, prefs: &Preferences) -> Map<String, Value> {
    // The provider expects whole numbers for these minimums.
    let min_beds = filters.min_bedrooms.max(prefs.target_bedrooms.trunc() - 1.0) as i64;
    let min_baths = filters.min_bathrooms.max(prefs.target_bathrooms.trunc() - 1.0) as i64;
    let min_sqft = 500.0_f64.max((prefs.target_sqft * 0.6).trunc()) as i64;

    let mut out = Map::new();
    out.insert("list_price".into(), json!({ "max": filters.max_price }));
    out.insert("beds".into(), json!({ "min": min_beds }));
    out.insert("baths".into(), json!({ "min": min_baths }));
    out.insert("sqft".into(), json!({ "min": min_sqft }));

    let types: Vec<&str> = filters
        .property_types
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if !types.is_empty() {
        out.insert("prop_type".into(), json!(types));
    }
    out
}

/// Builds the for-sale search. City and state searches override the
/// configured location parameter with `city` / `state_code`.
pub fn sale_search_request(
    filters: &ListingFilters,
    prefs: &Preferences,
    endpoint: &str,
    method: HttpMethod,
    location_param: &str,
    limit: u32,
) -> SearchRequest {
    let mut extra = sale_filters(filters, prefs);

    let (location_param, location_value) = match parse_location(&filters.location) {
        Location::Zip(zip) => (location_param.to_string(), zip),
        Location::State(state) => ("state_code".to_string(), state),
        Location::City { city, state } => {
            if let Some(state) = state {
                extra.insert("state_code".into(), json!(state));
            }
            ("city".to_string(), title_case(&city))
        }
    };

    SearchRequest {
        endpoint: endpoint.to_string(),
        method,
        location_param,
        location_value,
        limit,
        purpose: SearchPurpose::Sale,
        filters: extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(location: &str) -> ListingFilters {
        ListingFilters {
            location: location.into(),
            max_price: 350_000.0,
            property_types: "single_family, condo".into(),
            min_bedrooms: 0.0,
            min_bathrooms: 0.0,
            results: 10,
        }
    }

    #[test]
    fn filters_follow_preferences() {
        let out = sale_filters(&filters("76131"), &Preferences::default());
        assert_eq!(out["list_price"], json!({ "max": 350_000.0 }));
        assert_eq!(out["beds"], json!({ "min": 2 }));
        assert_eq!(out["baths"], json!({ "min": 1 }));
        assert_eq!(out["sqft"], json!({ "min": 1080 }));
        assert_eq!(out["prop_type"], json!(["single_family", "condo"]));
        assert_eq!(out["sqft"].to_string(), r#"{"min":1080}"#);
    }

    #[test]
    fn explicit_minimums_are_truncated_to_whole_numbers() {
        let mut f = filters("76131");
        f.min_bedrooms = 4.5;
        f.min_bathrooms = 2.5;
        let out = sale_filters(&f, &Preferences::default());
        assert_eq!(out["beds"].to_string(), r#"{"min":4}"#);
        assert_eq!(out["baths"].to_string(), r#"{"min":2}"#);
    }

    #[test]
    fn zip_uses_configured_param() {
        let req = sale_search_request(
            &filters("76131"),
            &Preferences::default(),
            "/properties/v3/list",
            HttpMethod::Get,
            "zip",
            42,
        );
        assert_eq!(req.location_param, "zip");
        assert_eq!(req.location_value, "76131");
        assert_eq!(req.purpose, SearchPurpose::Sale);
    }

    #[test]
    fn city_and_state_searches_switch_param() {
        let prefs = Preferences::default();
        let city = sale_search_request(&filters("fort worth, tx"), &prefs, "/list", HttpMethod::Post, "zip", 42);
        assert_eq!(city.location_param, "city");
        assert_eq!(city.location_value, "Fort Worth");
        assert_eq!(city.filters["state_code"], json!("TX"));

        let state = sale_search_request(&filters("ok"), &prefs, "/list", HttpMethod::Post, "zip", 42);
        assert_eq!(state.location_param, "state_code");
        assert_eq!(state.location_value, "OK");
    }
}
