// src/analysis/analyzer.rs

use crate::analysis::mortgage::mortgage_payment;
use crate::analysis::rates::{insurance_factor, property_tax_rate};
use crate::analysis::score::score_listing;
use crate::analysis::settings::{Preferences, Underwriting};
use crate::domain::analysis::Analysis;
use crate::domain::listing::Listing;
use crate::realtor::RealtorApiError;
use crate::rent::RentEstimator;

/// Down payments below this share of the price carry PMI.
const PMI_THRESHOLD: f64 = 0.2;

/// Runs the full monthly cashflow model for one listing.
pub fn analyze_listing(
    listing: &Listing,
    terms: &Underwriting,
    prefs: &Preferences,
    rent_estimator: &mut RentEstimator,
) -> Result<Analysis, RealtorApiError> {
    let down_payment = terms.max_down_payment.min(listing.price);
    let principal = listing.price - down_payment;

    let rent = rent_estimator.estimate(listing)?;
    let estimated_rent = rent.rent;

    let monthly_mortgage_pi = mortgage_payment(principal, terms.interest_rate, terms.loan_years);
    let monthly_taxes = listing.price * property_tax_rate(&listing.state) / 12.0;
    let monthly_insurance = listing.price
        * terms.insurance_rate
        * terms.landlord_insurance_multiplier
        * insurance_factor(&listing.state)
        / 12.0;

    let down_payment_pct = if listing.price > 0.0 {
        down_payment / listing.price
    } else {
        1.0
    };
    let monthly_pmi = if down_payment_pct < PMI_THRESHOLD && principal > 0.0 {
        principal * terms.pmi_rate / 12.0
    } else {
        0.0
    };

    let monthly_maintenance = estimated_rent * terms.maintenance_rate;
    let monthly_management = estimated_rent * terms.management_rate;
    let monthly_vacancy = estimated_rent * terms.vacancy_rate;

    let monthly_total_costs = monthly_mortgage_pi
        + monthly_taxes
        + monthly_insurance
        + monthly_maintenance
        + monthly_management
        + monthly_vacancy
        + monthly_pmi
        + listing.hoa_monthly;
    let monthly_net_cashflow = estimated_rent - monthly_total_costs;

    let annual_cash_on_cash_return = if down_payment > 0.0 {
        monthly_net_cashflow * 12.0 / down_payment * 100.0
    } else {
        f64::INFINITY
    };

    Ok(Analysis {
        listing: listing.clone(),
        score: score_listing(listing, prefs),
        estimated_rent,
        rent_estimation_method: rent.method,
        comp_count: rent.comp_count,
        monthly_mortgage_pi,
        monthly_taxes,
        monthly_insurance,
        monthly_maintenance,
        monthly_management,
        monthly_vacancy,
        monthly_hoa: listing.hoa_monthly,
        monthly_pmi,
        monthly_total_costs,
        monthly_net_cashflow,
        annual_cash_on_cash_return,
        down_payment,
        down_payment_pct: down_payment_pct * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rent::heuristic::heuristic_rent;
    use crate::rent::{RentMethod, RentMode};
    use approx::assert_relative_eq;

    fn ohio_duplex() -> Listing {
        Listing {
            listing_id: "oh-1".into(),
            address: "118 Elm St".into(),
            city: "Dayton".into(),
            state: "OH".into(),
            zip_code: "45402".into(),
            price: 100_000.0,
            sqft: 2000.0,
            bedrooms: 4.0,
            bathrooms: 2.0,
            year_built: 1960,
            lot_size_sqft: 5000.0,
            hoa_monthly: 25.0,
            ..Listing::default()
        }
    }

    #[test]
    fn cashflow_adds_up() {
        let listing = ohio_duplex();
        let terms = Underwriting::with_down_payment(25_000.0);
        let mut estimator = RentEstimator::new(RentMode::Heuristic, 3);

        let a = analyze_listing(&listing, &terms, &Preferences::default(), &mut estimator).unwrap();

        assert_eq!(a.rent_estimation_method, RentMethod::Heuristic);
        assert_relative_eq!(a.estimated_rent, heuristic_rent(&listing));
        assert_relative_eq!(a.down_payment, 25_000.0);
        assert_relative_eq!(a.down_payment_pct, 25.0);
        assert_eq!(a.monthly_pmi, 0.0);
        assert_relative_eq!(a.monthly_taxes, 100_000.0 * 0.0156 / 12.0);
        assert_relative_eq!(a.monthly_insurance, 100_000.0 * 0.0035 * 1.15 / 12.0);
        assert_relative_eq!(a.monthly_hoa, 25.0);
        assert_relative_eq!(
            a.monthly_net_cashflow,
            a.estimated_rent - a.monthly_total_costs
        );
        assert_relative_eq!(
            a.annual_cash_on_cash_return,
            a.monthly_net_cashflow * 12.0 / 25_000.0 * 100.0
        );
    }

    #[test]
    fn small_down_payment_pays_pmi() {
        let listing = ohio_duplex();
        let terms = Underwriting::with_down_payment(10_000.0);
        let mut estimator = RentEstimator::new(RentMode::Heuristic, 3);

        let a = analyze_listing(&listing, &terms, &Preferences::default(), &mut estimator).unwrap();
        assert_relative_eq!(a.monthly_pmi, 90_000.0 * 0.008 / 12.0);
    }

    #[test]
    fn all_cash_purchase_has_no_mortgage() {
        let listing = ohio_duplex();
        let terms = Underwriting::with_down_payment(500_000.0);
        let mut estimator = RentEstimator::new(RentMode::Heuristic, 3);

        let a = analyze_listing(&listing, &terms, &Preferences::default(), &mut estimator).unwrap();
        assert_relative_eq!(a.down_payment, 100_000.0);
        assert_eq!(a.monthly_mortgage_pi, 0.0);
        assert_eq!(a.monthly_pmi, 0.0);
    }
}
