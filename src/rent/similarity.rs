// src/rent/similarity.rs

use crate::domain::listing::Listing;

/// Linear similarity in `[0, 1]`: 1 at `target`, falling to 0 at `tolerance` away.
/// A non-positive tolerance always scores 0.
pub fn bounded_similarity(actual: f64, target: f64, tolerance: f64) -> f64 {
    if tolerance <= 0.0 {
        return 0.0;
    }
    let distance = (actual - target).abs();
    (1.0 - distance / tolerance).max(0.0)
}

/// How much a rental comp should count toward the subject's rent estimate.
///
/// Sums per-attribute similarities scaled by a fixed importance:
/// sqft 3.0, bedrooms 2.0, bathrooms 2.0, year built 1.0, lot size 0.5.
/// Subjects with unknown sqft or lot size are compared against typical
/// values (1500 sqft, 6000 sqft lot).
pub fn similarity_weight(subject: &Listing, comp: &Listing) -> f64 {
    let sqft_target = if subject.sqft > 0.0 { subject.sqft } else { 1500.0 };
    let lot_target = if subject.lot_size_sqft > 0.0 {
        subject.lot_size_sqft
    } else {
        6000.0
    };

    let mut score = 0.0;
    score += bounded_similarity(comp.bedrooms, subject.bedrooms, 2.0) * 2.0;
    score += bounded_similarity(comp.bathrooms, subject.bathrooms, 2.0) * 2.0;
    score += bounded_similarity(comp.sqft, sqft_target, (subject.sqft * 0.5).max(500.0)) * 3.0;
    score += bounded_similarity(
        f64::from(comp.year_built),
        f64::from(subject.year_built),
        40.0,
    ) * 1.0;
    score += bounded_similarity(
        comp.lot_size_sqft,
        lot_target,
        subject.lot_size_sqft.max(2000.0),
    ) * 0.5;

    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn house(bedrooms: f64, bathrooms: f64, sqft: f64, year_built: i32, lot: f64) -> Listing {
        Listing {
            bedrooms,
            bathrooms,
            sqft,
            year_built,
            lot_size_sqft: lot,
            ..Listing::default()
        }
    }

    #[test]
    fn non_positive_tolerance_scores_zero() {
        for tolerance in [0.0, -1.0, -250.0] {
            assert_eq!(bounded_similarity(3.0, 3.0, tolerance), 0.0);
            assert_eq!(bounded_similarity(10.0, -4.0, tolerance), 0.0);
        }
    }

    #[test]
    fn exact_match_scores_one() {
        for (value, tolerance) in [(0.0, 1.0), (3.0, 2.0), (1800.0, 900.0)] {
            assert_relative_eq!(bounded_similarity(value, value, tolerance), 1.0);
        }
    }

    #[test]
    fn similarity_falls_off_linearly_and_floors_at_zero() {
        assert_relative_eq!(bounded_similarity(4.0, 3.0, 2.0), 0.5);
        assert_relative_eq!(bounded_similarity(2.0, 3.0, 2.0), 0.5);
        assert_eq!(bounded_similarity(9.0, 3.0, 2.0), 0.0);
    }

    #[test]
    fn identical_house_gets_full_weight() {
        let subject = house(3.0, 2.0, 1800.0, 1995, 7000.0);
        // 2 + 2 + 3 + 1 + 0.5
        assert_relative_eq!(similarity_weight(&subject, &subject.clone()), 8.5);
    }

    #[test]
    fn unknown_subject_sqft_compares_against_typical_size() {
        let subject = house(3.0, 2.0, 0.0, 1995, 0.0);
        let comp = house(3.0, 2.0, 1500.0, 1995, 6000.0);
        assert_relative_eq!(similarity_weight(&subject, &comp), 8.5);
    }

    #[test]
    fn dissimilar_house_gets_zero_weight() {
        let subject = house(3.0, 2.0, 1800.0, 1995, 7000.0);
        let comp = house(8.0, 6.0, 9000.0, 1900, 90000.0);
        assert_eq!(similarity_weight(&subject, &comp), 0.0);
    }
}
