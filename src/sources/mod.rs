pub mod csv_files;
pub mod sale_search;

use crate::cli::{ApiArgs, ListingSource};
use crate::analysis::{ListingFilters, Preferences};
use crate::domain::listing::Listing;
use crate::errors::{AppError, ConfigError};
use crate::realtor::RealtorClient;
use std::path::Path;

pub use csv_files::{load_listings_csv, load_rental_comps_csv};
pub use sale_search::sale_search_request;

/// Loads for-sale listings from the selected source.
///
/// A failed API search aborts the run; a missing key surfaces as the
/// key's own configuration message.
pub fn load_listings(
    source: ListingSource,
    listings_csv: Option<&Path>,
    client: &RealtorClient,
    api: &ApiArgs,
    filters: &ListingFilters,
    prefs: &Preferences,
) -> Result<Vec<Listing>, AppError> {
    match source {
        ListingSource::Csv => {
            let path = listings_csv.ok_or_else(|| {
                ConfigError::MissingArgument("--listings-csv is required when --source csv".into())
            })?;
            Ok(load_listings_csv(path)?)
        }
        ListingSource::RapidapiRealtor => {
            let request = sale_search_request(
                filters,
                prefs,
                &api.rapidapi_endpoint,
                api.rapidapi_method,
                &api.rapidapi_location_param,
                api.rapidapi_limit,
            );
            let listings = client.search(&request).map_err(|e| {
                if e.is_config() {
                    AppError::Api(e)
                } else {
                    AppError::SaleSearch(e)
                }
            })?;
            tracing::info!(count = listings.len(), "fetched for-sale listings");
            Ok(listings)
        }
    }
}
