pub mod client;
mod mapping;
mod models;
mod realtor_error;
mod rentals;

pub use client::{HttpMethod, RealtorClient, SearchPurpose, SearchRequest};
pub use realtor_error::RealtorApiError;
pub use rentals::RealtorRentals;
