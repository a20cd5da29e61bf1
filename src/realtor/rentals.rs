use crate::domain::listing::Listing;
use crate::realtor::client::{HttpMethod, RealtorClient, SearchPurpose, SearchRequest};
use crate::realtor::RealtorApiError;
use crate::rent::RentalCompSource;
use serde_json::Map;

/// For-rent search by ZIP. Each result's `price` is its monthly rent.
pub struct RealtorRentals {
    client: RealtorClient,
    endpoint: String,
    method: HttpMethod,
    location_param: String,
    limit: u32,
}

impl RealtorRentals {
    pub fn new(
        client: RealtorClient,
        endpoint: impl Into<String>,
        method: HttpMethod,
        location_param: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            method,
            location_param: location_param.into(),
            limit,
        }
    }

    fn request_for(&self, zip_code: &str) -> SearchRequest {
        SearchRequest {
            endpoint: self.endpoint.clone(),
            method: self.method,
            location_param: self.location_param.clone(),
            location_value: zip_code.to_string(),
            limit: self.limit,
            purpose: SearchPurpose::Rent,
            filters: Map::new(),
        }
    }
}

impl RentalCompSource for RealtorRentals {
    fn fetch_rentals(&self, zip_code: &str) -> Result<Vec<Listing>, RealtorApiError> {
        let rentals = self.client.search(&self.request_for(zip_code))?;
        tracing::debug!(zip = zip_code, count = rentals.len(), "fetched rental comps");
        Ok(rentals)
    }
}
