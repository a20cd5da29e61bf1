use crate::analysis::settings::Preferences;
use crate::domain::listing::Listing;
use crate::rent::similarity::bounded_similarity;

/// How closely a listing matches the buyer's targets, on a 0-100 scale.
pub fn score_listing(listing: &Listing, prefs: &Preferences) -> f64 {
    let components = [
        (
            bounded_similarity(listing.sqft, prefs.target_sqft, prefs.target_sqft.max(1.0)),
            prefs.weight_sqft,
        ),
        (
            bounded_similarity(listing.bedrooms, prefs.target_bedrooms, 3.0),
            prefs.weight_bedrooms,
        ),
        (
            bounded_similarity(listing.bathrooms, prefs.target_bathrooms, 3.0),
            prefs.weight_bathrooms,
        ),
        (
            bounded_similarity(
                f64::from(listing.year_built),
                prefs.target_year_built,
                80.0,
            ),
            prefs.weight_year_built,
        ),
        (
            bounded_similarity(
                listing.lot_size_sqft,
                prefs.target_lot_size,
                prefs.target_lot_size.max(1.0),
            ),
            prefs.weight_lot_size,
        ),
    ];

    let weighted_sum: f64 = components.iter().map(|(c, w)| c * w).sum();
    let max_score: f64 = components.iter().map(|(_, w)| w).sum();
    if max_score == 0.0 {
        return 0.0;
    }
    weighted_sum / max_score * 100.0
}
