mod analyzer;
mod mortgage;
mod rates;
mod recommend;
mod score;
mod settings;

pub use recommend::recommend;
pub use settings::{ListingFilters, Preferences, Underwriting};
