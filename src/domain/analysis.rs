// src/domain/analysis.rs

use crate::domain::listing::Listing;
use crate::rent::RentMethod;

/// The investment economics computed for a single listing.
/// This is the shape consumed by both the console report and the spreadsheet export.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub listing: Listing,
    /// Preference score on a 0-100 scale.
    pub score: f64,

    // === Rent ===
    pub estimated_rent: f64,
    pub rent_estimation_method: RentMethod,
    pub comp_count: usize,

    // === Monthly costs ===
    pub monthly_mortgage_pi: f64,
    pub monthly_taxes: f64,
    pub monthly_insurance: f64,
    pub monthly_maintenance: f64,
    pub monthly_management: f64,
    pub monthly_vacancy: f64,
    pub monthly_hoa: f64,
    pub monthly_pmi: f64,
    pub monthly_total_costs: f64,

    // === Returns ===
    pub monthly_net_cashflow: f64,
    /// Percent per year. Infinite when no cash was put down.
    pub annual_cash_on_cash_return: f64,
    pub down_payment: f64,
    /// Percent of the purchase price.
    pub down_payment_pct: f64,
}
