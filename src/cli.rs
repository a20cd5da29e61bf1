//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::analysis::{ListingFilters, Preferences, Underwriting};
use crate::config::DEFAULT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::realtor::HttpMethod;
use crate::rent::RentMode;

#[derive(Parser, Debug)]
#[command(
    name = "house_hunter",
    version,
    about = "Recommend investment houses with positive cashflow."
)]
pub struct Cli {
    /// Where for-sale listings come from.
    #[arg(long, value_enum, default_value = "csv")]
    pub source: ListingSource,

    /// CSV file with active home listings (required for --source csv).
    #[arg(long, value_name = "PATH")]
    pub listings_csv: Option<PathBuf>,

    #[command(flatten)]
    pub filters: ListingFilters,

    #[command(flatten)]
    pub underwriting: Underwriting,

    #[command(flatten)]
    pub preferences: Preferences,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub rent: RentArgs,

    /// Also write the recommendations to an .xlsx workbook.
    #[arg(long, value_name = "PATH")]
    pub export_xlsx: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG when set).
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevelArg,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListingSource {
    Csv,
    #[value(name = "rapidapi-realtor")]
    RapidapiRealtor,
}

/// RapidAPI connection and for-sale search settings.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// RapidAPI key (overrides RAPIDAPI_KEY and the config file).
    #[arg(long)]
    pub rapidapi_key: Option<String>,

    /// Optional KEY=VALUE config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    #[arg(long, default_value = "realtor-search.p.rapidapi.com")]
    pub rapidapi_host: String,

    /// API path for homes-for-sale search.
    #[arg(long, default_value = "/properties/v3/list")]
    pub rapidapi_endpoint: String,

    /// Max for-sale API listings to fetch.
    #[arg(long, default_value_t = 42)]
    pub rapidapi_limit: u32,

    /// HTTP method for the for-sale endpoint.
    #[arg(long, value_enum, ignore_case = true, default_value = "GET")]
    pub rapidapi_method: HttpMethod,

    /// Location parameter key (e.g. zip, postal_code).
    #[arg(long, default_value = "zip")]
    pub rapidapi_location_param: String,
}

/// Rent estimation settings.
#[derive(Args, Debug, Clone)]
pub struct RentArgs {
    #[arg(long, value_enum, default_value = "hybrid")]
    pub rent_source: RentMode,

    /// CSV of local rental comps (used when --rent-source csv|hybrid).
    #[arg(long, value_name = "PATH")]
    pub rental_comps_csv: Option<PathBuf>,

    /// API path for rental comps.
    #[arg(long, default_value = "/properties/v3/list-for-rent")]
    pub rapidapi_rent_endpoint: String,

    /// Max rental comps to fetch by ZIP.
    #[arg(long, default_value_t = 40)]
    pub rapidapi_rent_limit: u32,

    /// HTTP method for the rental comp endpoint.
    #[arg(long, value_enum, ignore_case = true, default_value = "GET")]
    pub rapidapi_rent_method: HttpMethod,

    /// Rental comp location parameter key.
    #[arg(long, default_value = "zip")]
    pub rapidapi_rent_location_param: String,

    /// Minimum comps required before using comp-based rent.
    #[arg(long, default_value_t = 3)]
    pub min_rent_comps: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Cross-field requirements clap cannot express on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == ListingSource::Csv && self.listings_csv.is_none() {
            return Err(ConfigError::MissingArgument(
                "--listings-csv is required when --source csv".into(),
            ));
        }
        if self.rent.rent_source == RentMode::Csv && self.rent.rental_comps_csv.is_none() {
            return Err(ConfigError::MissingArgument(
                "--rental-comps-csv is required when --rent-source csv".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "house_hunter",
        "--location",
        "76131",
        "--max-price",
        "350000",
        "--max-down-payment",
        "70000",
    ];

    fn parse(extra: &[&str]) -> Cli {
        Cli::try_parse_from(REQUIRED.iter().chain(extra)).unwrap()
    }

    #[test]
    fn defaults_match_documented_values() {
        let cli = parse(&["--listings-csv", "data/listings.csv"]);
        assert_eq!(cli.source, ListingSource::Csv);
        assert_eq!(cli.rent.rent_source, RentMode::Hybrid);
        assert_eq!(cli.rent.min_rent_comps, 3);
        assert_eq!(cli.api.rapidapi_method, HttpMethod::Get);
        assert_eq!(cli.underwriting.interest_rate, 6.75);
        assert_eq!(cli.underwriting.loan_years, 30);
        assert_eq!(cli.preferences.target_sqft, 1800.0);
        assert_eq!(cli.filters.results, 10);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn csv_source_requires_listings_file() {
        let err = parse(&[]).validate().unwrap_err();
        assert!(err.to_string().contains("--listings-csv"));
    }

    #[test]
    fn csv_rent_source_requires_comps_file() {
        let cli = parse(&["--listings-csv", "l.csv", "--rent-source", "csv"]);
        assert!(cli.validate().unwrap_err().to_string().contains("--rental-comps-csv"));
    }

    #[test]
    fn api_aliases_and_methods_parse() {
        let cli = parse(&[
            "--source",
            "rapidapi-realtor",
            "--rent-source",
            "api",
            "--rapidapi-rent-method",
            "post",
        ]);
        assert_eq!(cli.source, ListingSource::RapidapiRealtor);
        assert_eq!(cli.rent.rent_source, RentMode::Api);
        assert_eq!(cli.rent.rapidapi_rent_method, HttpMethod::Post);
        assert!(cli.validate().is_ok());
    }
}
