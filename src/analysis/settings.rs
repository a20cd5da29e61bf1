use clap::Args;

/// Financing and operating-cost assumptions applied to every listing.
#[derive(Debug, Clone, Args)]
pub struct Underwriting {
    /// Maximum available down payment.
    #[arg(long)]
    pub max_down_payment: f64,

    /// Annual mortgage rate percentage.
    #[arg(long, default_value_t = 6.75)]
    pub interest_rate: f64,

    /// Mortgage term in years.
    #[arg(long, default_value_t = 30)]
    pub loan_years: u32,

    /// Annual insurance as a fraction of price.
    #[arg(long, default_value_t = 0.0035)]
    pub insurance_rate: f64,

    /// Monthly maintenance as a fraction of rent.
    #[arg(long, default_value_t = 0.08)]
    pub maintenance_rate: f64,

    /// Monthly management fee as a fraction of rent.
    #[arg(long, default_value_t = 0.10)]
    pub management_rate: f64,

    /// Monthly vacancy reserve as a fraction of rent.
    #[arg(long, default_value_t = 0.05)]
    pub vacancy_rate: f64,

    /// Annual PMI rate applied when the down payment is below 20%.
    #[arg(long, default_value_t = 0.008)]
    pub pmi_rate: f64,

    /// Multiplier nudging homeowners insurance toward landlord policy cost.
    #[arg(long, default_value_t = 1.15)]
    pub landlord_insurance_multiplier: f64,
}

#[cfg(test)]
impl Underwriting {
    /// Documented defaults with only the down payment chosen.
    pub fn with_down_payment(max_down_payment: f64) -> Self {
        Self {
            max_down_payment,
            interest_rate: 6.75,
            loan_years: 30,
            insurance_rate: 0.0035,
            maintenance_rate: 0.08,
            management_rate: 0.10,
            vacancy_rate: 0.05,
            pmi_rate: 0.008,
            landlord_insurance_multiplier: 1.15,
        }
    }
}

/// What the buyer would ideally like, and how much each attribute matters.
#[derive(Debug, Clone, Args)]
pub struct Preferences {
    #[arg(long, default_value_t = 1800.0)]
    pub target_sqft: f64,
    #[arg(long, default_value_t = 3.0)]
    pub target_bedrooms: f64,
    #[arg(long, default_value_t = 2.0)]
    pub target_bathrooms: f64,
    #[arg(long, default_value_t = 1995.0)]
    pub target_year_built: f64,
    #[arg(long = "target-lot-size", default_value_t = 7000.0)]
    pub target_lot_size: f64,

    #[arg(long, default_value_t = 3.0)]
    pub weight_sqft: f64,
    #[arg(long, default_value_t = 2.0)]
    pub weight_bedrooms: f64,
    #[arg(long, default_value_t = 2.0)]
    pub weight_bathrooms: f64,
    #[arg(long, default_value_t = 1.5)]
    pub weight_year_built: f64,
    #[arg(long = "weight-lot-size", default_value_t = 1.0)]
    pub weight_lot_size: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            target_sqft: 1800.0,
            target_bedrooms: 3.0,
            target_bathrooms: 2.0,
            target_year_built: 1995.0,
            target_lot_size: 7000.0,
            weight_sqft: 3.0,
            weight_bedrooms: 2.0,
            weight_bathrooms: 2.0,
            weight_year_built: 1.5,
            weight_lot_size: 1.0,
        }
    }
}

/// Hard filters a listing must pass before it is analyzed.
#[derive(Debug, Clone, Args)]
pub struct ListingFilters {
    /// State abbreviation (e.g. TX), ZIP code, or "City, ST".
    #[arg(long)]
    pub location: String,

    /// Maximum purchase price.
    #[arg(long)]
    pub max_price: f64,

    /// Comma-separated property types to include (e.g. condo,single_family).
    #[arg(long, default_value = "")]
    pub property_types: String,

    #[arg(long, default_value_t = 0.0)]
    pub min_bedrooms: f64,

    #[arg(long, default_value_t = 0.0)]
    pub min_bathrooms: f64,

    /// Max recommendations returned.
    #[arg(long, default_value_t = 10)]
    pub results: usize,
}

impl ListingFilters {
    /// Lowercased, trimmed property types. Empty means "any".
    pub fn property_type_set(&self) -> Vec<String> {
        self.property_types
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect()
    }
}
