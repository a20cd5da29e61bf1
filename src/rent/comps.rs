// src/rent/comps.rs

use crate::domain::listing::Listing;
use crate::rent::median::weighted_median;
use crate::rent::similarity::similarity_weight;

/// Outcome of resolving a subject against a comparable pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompResolution {
    /// Weighted-median rent, present only when enough comps survived.
    pub estimate: Option<f64>,
    /// Number of same-ZIP comps with positive similarity weight.
    pub used_count: usize,
}

/// Estimates the subject's rent from comps in the same ZIP code.
///
/// Only comps with a positive rent and positive similarity weight count.
/// When fewer than `min_count` survive, the estimate is absent but the
/// surviving count is still reported.
pub fn resolve_comps(subject: &Listing, comps: &[Listing], min_count: usize) -> CompResolution {
    let same_zip: Vec<&Listing> = comps
        .iter()
        .filter(|c| c.zip_code == subject.zip_code && c.price > 0.0)
        .collect();
    if same_zip.is_empty() {
        return CompResolution {
            estimate: None,
            used_count: 0,
        };
    }

    let weighted: Vec<(f64, f64)> = same_zip
        .iter()
        .map(|c| (c.price, similarity_weight(subject, c)))
        .filter(|(_, weight)| *weight > 0.0)
        .collect();

    // With `min_count == 0` an all-zero-weight pool still resolves (to 0).
    if weighted.len() < min_count {
        return CompResolution {
            estimate: None,
            used_count: weighted.len(),
        };
    }

    CompResolution {
        estimate: Some(weighted_median(&weighted)),
        used_count: weighted.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Listing {
        Listing {
            zip_code: "76131".to_string(),
            bedrooms: 3.0,
            bathrooms: 2.0,
            sqft: 1800.0,
            year_built: 1995,
            lot_size_sqft: 7000.0,
            ..Listing::default()
        }
    }

    fn comp(zip: &str, rent: f64, bedrooms: f64, sqft: f64) -> Listing {
        Listing {
            zip_code: zip.to_string(),
            price: rent,
            bedrooms,
            bathrooms: 2.0,
            sqft,
            year_built: 1995,
            lot_size_sqft: 7000.0,
            ..Listing::default()
        }
    }

    /// Shares the subject's ZIP but nothing else, so its weight is zero.
    fn far_off_comp(rent: f64) -> Listing {
        Listing {
            zip_code: "76131".to_string(),
            price: rent,
            bedrooms: 9.0,
            bathrooms: 8.0,
            sqft: 12000.0,
            year_built: 1890,
            lot_size_sqft: 200000.0,
            ..Listing::default()
        }
    }

    #[test]
    fn no_same_zip_comps_is_absent_with_zero_count() {
        let pool = vec![comp("76132", 2000.0, 3.0, 1800.0)];
        let res = resolve_comps(&subject(), &pool, 1);
        assert_eq!(res.estimate, None);
        assert_eq!(res.used_count, 0);
    }

    #[test]
    fn other_zips_never_contribute() {
        let pool = vec![
            comp("76131", 1900.0, 3.0, 1800.0),
            // Identical houses elsewhere must not count toward the gate.
            comp("76132", 5000.0, 3.0, 1800.0),
            comp("76133", 5000.0, 3.0, 1800.0),
        ];

        let gated = resolve_comps(&subject(), &pool, 2);
        assert_eq!(gated.estimate, None);
        assert_eq!(gated.used_count, 1);

        let res = resolve_comps(&subject(), &pool, 1);
        assert_eq!(res.estimate, Some(1900.0));
        assert_eq!(res.used_count, 1);
    }

    #[test]
    fn zero_rent_comps_are_ignored() {
        let pool = vec![
            comp("76131", 0.0, 3.0, 1800.0),
            comp("76131", -50.0, 3.0, 1800.0),
            comp("76131", 2100.0, 3.0, 1800.0),
        ];
        let res = resolve_comps(&subject(), &pool, 1);
        assert_eq!(res.estimate, Some(2100.0));
        assert_eq!(res.used_count, 1);
    }

    #[test]
    fn zero_weight_comps_do_not_satisfy_min_count() {
        let pool = vec![
            comp("76131", 2000.0, 3.0, 1800.0),
            far_off_comp(4000.0),
            far_off_comp(4500.0),
        ];
        let res = resolve_comps(&subject(), &pool, 3);
        assert_eq!(res.estimate, None);
        assert_eq!(res.used_count, 1);
    }

    #[test]
    fn zero_min_count_resolves_all_zero_weight_pool_to_zero() {
        let pool = vec![far_off_comp(4000.0)];
        let res = resolve_comps(&subject(), &pool, 0);
        assert_eq!(res.estimate, Some(0.0));
        assert_eq!(res.used_count, 0);

        // Still absent when nothing shares the ZIP.
        let elsewhere = vec![comp("76132", 2000.0, 3.0, 1800.0)];
        assert_eq!(resolve_comps(&subject(), &elsewhere, 0).estimate, None);
    }

    #[test]
    fn enough_similar_comps_yield_weighted_median() {
        let pool = vec![
            comp("76131", 1800.0, 3.0, 1750.0),
            comp("76131", 2000.0, 3.0, 1800.0),
            comp("76131", 2200.0, 3.0, 1850.0),
        ];
        let res = resolve_comps(&subject(), &pool, 3);
        assert_eq!(res.estimate, Some(2000.0));
        assert_eq!(res.used_count, 3);
    }
}
