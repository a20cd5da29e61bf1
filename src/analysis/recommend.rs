// src/analysis/recommend.rs

use crate::analysis::analyzer::analyze_listing;
use crate::analysis::settings::{ListingFilters, Preferences, Underwriting};
use crate::domain::analysis::Analysis;
use crate::domain::listing::Listing;
use crate::domain::location::parse_location;
use crate::realtor::RealtorApiError;
use crate::rent::RentEstimator;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref STREET_SUFFIXES: Vec<(Regex, &'static str)> = [
        ("street", "st"),
        ("st.", "st"),
        ("road", "rd"),
        ("rd.", "rd"),
        ("drive", "dr"),
        ("dr.", "dr"),
        ("avenue", "ave"),
        ("ave.", "ave"),
        ("lane", "ln"),
        ("ln.", "ln"),
        ("boulevard", "blvd"),
        ("blvd.", "blvd"),
        ("court", "ct"),
        ("ct.", "ct"),
        ("trail", "trl"),
        ("trl.", "trl"),
        ("place", "pl"),
        ("pl.", "pl"),
        ("way", "wy"),
        ("wy.", "wy"),
    ]
    .iter()
    .map(|(long, short)| {
        let pattern = format!(r"\b{}\b", regex::escape(long));
        (Regex::new(&pattern).expect("valid suffix pattern"), *short)
    })
    .collect();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]").expect("valid pattern");
}

/// Collapses spelling variants of an address ("123 Main Street" vs
/// "123 main st.") into one comparable key.
pub fn normalize_address_key(address: &str) -> String {
    let mut normalized = address.to_lowercase();
    for (pattern, short) in STREET_SUFFIXES.iter() {
        normalized = pattern.replace_all(&normalized, *short).into_owned();
    }
    NON_ALNUM.replace_all(&normalized, "").into_owned()
}

/// Keeps one analysis per normalized address + ZIP: the best cashflow,
/// and on a tie the lower price. First-seen order is preserved.
pub fn deduplicate_analyses(analyses: Vec<Analysis>) -> Vec<Analysis> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, Analysis> = HashMap::new();

    for analysis in analyses {
        let key = format!(
            "{}|{}",
            normalize_address_key(&analysis.listing.address),
            analysis.listing.zip_code
        );
        let replace = match best.get(&key) {
            None => {
                order.push(key.clone());
                true
            }
            Some(existing) => {
                analysis.monthly_net_cashflow > existing.monthly_net_cashflow
                    || (analysis.monthly_net_cashflow == existing.monthly_net_cashflow
                        && analysis.listing.price < existing.listing.price)
            }
        };
        if replace {
            best.insert(key, analysis);
        }
    }

    order.into_iter().filter_map(|k| best.remove(&k)).collect()
}

fn passes_filters(listing: &Listing, filters: &ListingFilters, terms: &Underwriting) -> bool {
    let location = parse_location(&filters.location);
    let property_types = filters.property_type_set();

    location.matches(listing)
        && listing.price <= filters.max_price
        && listing.bedrooms >= filters.min_bedrooms
        && listing.bathrooms >= filters.min_bathrooms
        && (property_types.is_empty()
            || property_types.contains(&listing.property_type.to_lowercase()))
        && terms.max_down_payment.min(listing.price) > 0.0
}

/// Filters, analyzes and ranks listings, keeping only positive cashflow.
///
/// Ranked by monthly cashflow, then cash-on-cash return, then preference
/// score, all descending, and truncated to `filters.results`.
pub fn recommend(
    listings: &[Listing],
    filters: &ListingFilters,
    terms: &Underwriting,
    prefs: &Preferences,
    rent_estimator: &mut RentEstimator,
) -> Result<Vec<Analysis>, RealtorApiError> {
    let candidates: Vec<&Listing> = listings
        .iter()
        .filter(|l| passes_filters(l, filters, terms))
        .collect();
    tracing::info!(
        loaded = listings.len(),
        candidates = candidates.len(),
        "filtered listings"
    );

    let mut positive = Vec::new();
    for listing in candidates {
        let analysis = analyze_listing(listing, terms, prefs, rent_estimator)?;
        tracing::debug!(
            listing = %listing.listing_id,
            rent = analysis.estimated_rent,
            method = %analysis.rent_estimation_method,
            cashflow = analysis.monthly_net_cashflow,
            "analyzed listing"
        );
        if analysis.monthly_net_cashflow > 0.0 {
            positive.push(analysis);
        }
    }

    let mut ranked = deduplicate_analyses(positive);
    ranked.sort_by(|a, b| {
        b.monthly_net_cashflow
            .total_cmp(&a.monthly_net_cashflow)
            .then_with(|| {
                b.annual_cash_on_cash_return
                    .total_cmp(&a.annual_cash_on_cash_return)
            })
            .then_with(|| b.score.total_cmp(&a.score))
    });
    ranked.truncate(filters.results);

    tracing::info!(recommended = ranked.len(), "ranked recommendations");
    Ok(ranked)
}
