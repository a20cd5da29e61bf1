// src/domain/listing.rs

/// A home listing as produced by one of the loaders (CSV row or API record).
///
/// When a listing is used as a rental comparable, `price` holds the monthly
/// rent instead of the sale price.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    // Identity
    pub listing_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    // Physical attributes
    pub price: f64,
    pub sqft: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub year_built: i32,
    pub lot_size_sqft: f64,
    pub hoa_monthly: f64,

    pub property_type: String,
    pub listing_url: String,
}

/// Year assumed when a source leaves `year_built` blank.
pub const DEFAULT_YEAR_BUILT: i32 = 1980;

impl Default for Listing {
    fn default() -> Self {
        Self {
            listing_id: String::new(),
            address: "Unknown Address".to_string(),
            city: "Unknown City".to_string(),
            state: "NA".to_string(),
            zip_code: "00000".to_string(),
            price: 0.0,
            sqft: 0.0,
            bedrooms: 0.0,
            bathrooms: 0.0,
            year_built: DEFAULT_YEAR_BUILT,
            lot_size_sqft: 0.0,
            hoa_monthly: 0.0,
            property_type: "unknown".to_string(),
            listing_url: String::new(),
        }
    }
}
