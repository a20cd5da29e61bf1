// src/rent/estimator.rs

use crate::domain::listing::Listing;
use crate::realtor::RealtorApiError;
use crate::rent::comps::resolve_comps;
use crate::rent::heuristic::heuristic_rent;
use clap::ValueEnum;
use std::collections::HashMap;
use std::fmt;

/// Lowest monthly rent reported from a comp-based estimate.
pub const COMP_RENT_FLOOR: f64 = 500.0;

/// Anything that can supply rental comparables for a ZIP code.
pub trait RentalCompSource {
    fn fetch_rentals(&self, zip_code: &str) -> Result<Vec<Listing>, RealtorApiError>;
}

/// Where rent estimates are allowed to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RentMode {
    Heuristic,
    Csv,
    #[value(name = "rapidapi-realtor", alias = "api")]
    Api,
    Hybrid,
}

/// One comparable-based strategy. Tried in the order the mode lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompTier {
    Csv,
    Api,
}

impl RentMode {
    /// CSV comps come first: they are local and already loaded.
    pub fn comp_tiers(self) -> &'static [CompTier] {
        match self {
            RentMode::Heuristic => &[],
            RentMode::Csv => &[CompTier::Csv],
            RentMode::Api => &[CompTier::Api],
            RentMode::Hybrid => &[CompTier::Csv, CompTier::Api],
        }
    }

    pub fn uses_csv(self) -> bool {
        self.comp_tiers().contains(&CompTier::Csv)
    }

    pub fn uses_api(self) -> bool {
        self.comp_tiers().contains(&CompTier::Api)
    }
}

/// Provenance of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentMethod {
    Heuristic,
    CsvComps,
    ApiComps,
    HeuristicFallback,
}

impl RentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            RentMethod::Heuristic => "heuristic",
            RentMethod::CsvComps => "csv-comps",
            RentMethod::ApiComps => "api-comps",
            RentMethod::HeuristicFallback => "heuristic-fallback",
        }
    }
}

impl fmt::Display for RentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentEstimate {
    pub rent: f64,
    pub method: RentMethod,
    pub comp_count: usize,
}

impl RentEstimate {
    fn heuristic(listing: &Listing, method: RentMethod) -> Self {
        Self {
            rent: heuristic_rent(listing),
            method,
            comp_count: 0,
        }
    }
}

/// Estimates monthly rent one listing at a time.
///
/// State carried across listings: the per-ZIP cache of API comps (never
/// invalidated during a run) and whether the API has already failed, so
/// the fallback warning is logged once.
pub struct RentEstimator {
    mode: RentMode,
    min_comps: usize,
    csv_comps: Vec<Listing>,
    api_source: Option<Box<dyn RentalCompSource>>,
    api_comp_cache: HashMap<String, Vec<Listing>>,
    api_failed: bool,
}

impl RentEstimator {
    pub fn new(mode: RentMode, min_comps: usize) -> Self {
        Self {
            mode,
            min_comps,
            csv_comps: Vec::new(),
            api_source: None,
            api_comp_cache: HashMap::new(),
            api_failed: false,
        }
    }

    /// Preloaded local comps, where `price` is monthly rent.
    pub fn with_csv_comps(mut self, comps: Vec<Listing>) -> Self {
        self.csv_comps = comps;
        self
    }

    pub fn with_api_source(mut self, source: Box<dyn RentalCompSource>) -> Self {
        self.api_source = Some(source);
        self
    }

    pub fn api_failed(&self) -> bool {
        self.api_failed
    }

    /// Rent for one listing, walking the mode's tiers before falling back
    /// to the heuristic.
    ///
    /// Only a configuration error (no API key) is returned as `Err`; any
    /// other API failure is logged once and the next tier is tried.
    pub fn estimate(&mut self, listing: &Listing) -> Result<RentEstimate, RealtorApiError> {
        if self.mode == RentMode::Heuristic {
            return Ok(RentEstimate::heuristic(listing, RentMethod::Heuristic));
        }

        for tier in self.mode.comp_tiers() {
            let attempt = match tier {
                CompTier::Csv => self.try_csv_comps(listing),
                CompTier::Api => self.try_api_comps(listing)?,
            };
            if let Some(estimate) = attempt {
                return Ok(estimate);
            }
        }

        Ok(RentEstimate::heuristic(
            listing,
            RentMethod::HeuristicFallback,
        ))
    }

    fn try_csv_comps(&self, listing: &Listing) -> Option<RentEstimate> {
        if self.csv_comps.is_empty() {
            return None;
        }
        estimate_from_comps(listing, &self.csv_comps, self.min_comps, RentMethod::CsvComps)
    }

    fn try_api_comps(&mut self, listing: &Listing) -> Result<Option<RentEstimate>, RealtorApiError> {
        let Some(source) = self.api_source.as_deref() else {
            return Ok(None);
        };

        if !self.api_comp_cache.contains_key(&listing.zip_code) {
            match source.fetch_rentals(&listing.zip_code) {
                Ok(comps) => {
                    self.api_comp_cache.insert(listing.zip_code.clone(), comps);
                }
                Err(e) if e.is_config() => return Err(e),
                Err(e) => {
                    self.note_api_failure(&e);
                    return Ok(None);
                }
            }
        }

        let comps = self
            .api_comp_cache
            .get(&listing.zip_code)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(estimate_from_comps(
            listing,
            comps,
            self.min_comps,
            RentMethod::ApiComps,
        ))
    }

    fn note_api_failure(&mut self, error: &RealtorApiError) {
        if self.api_failed {
            tracing::debug!(%error, "rental comp API still unavailable");
            return;
        }
        self.api_failed = true;
        tracing::warn!(
            %error,
            "Rental comp API unavailable; falling back to heuristic rent model"
        );
    }
}

fn estimate_from_comps(
    listing: &Listing,
    comps: &[Listing],
    min_comps: usize,
    method: RentMethod,
) -> Option<RentEstimate> {
    let resolution = resolve_comps(listing, comps, min_comps);
    tracing::debug!(
        listing = %listing.listing_id,
        zip = %listing.zip_code,
        method = %method,
        comps = resolution.used_count,
        estimate = ?resolution.estimate,
        "comp resolution"
    );

    resolution.estimate.map(|rent| RentEstimate {
        rent: rent.max(COMP_RENT_FLOOR),
        method,
        comp_count: resolution.used_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hybrid_tries_csv_before_api() {
        assert_eq!(
            RentMode::Hybrid.comp_tiers(),
            &[CompTier::Csv, CompTier::Api]
        );
        assert!(RentMode::Csv.uses_csv() && !RentMode::Csv.uses_api());
        assert!(RentMode::Api.uses_api() && !RentMode::Api.uses_csv());
        assert!(RentMode::Heuristic.comp_tiers().is_empty());
    }

    #[test]
    fn method_tags_match_report_names() {
        let tags: Vec<_> = [
            RentMethod::Heuristic,
            RentMethod::CsvComps,
            RentMethod::ApiComps,
            RentMethod::HeuristicFallback,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(
            tags,
            ["heuristic", "csv-comps", "api-comps", "heuristic-fallback"]
        );
    }

    #[test]
    fn heuristic_mode_ignores_comps() {
        let subject = Listing {
            zip_code: "76131".into(),
            state: "TX".into(),
            sqft: 1800.0,
            ..Listing::default()
        };
        let comps = vec![Listing {
            price: 5000.0,
            ..subject.clone()
        }];
        let mut estimator = RentEstimator::new(RentMode::Heuristic, 1).with_csv_comps(comps);

        let estimate = estimator.estimate(&subject).unwrap();
        assert_eq!(estimate.method, RentMethod::Heuristic);
        assert_eq!(estimate.comp_count, 0);
        assert_eq!(estimate.rent, heuristic_rent(&subject));
    }
}
