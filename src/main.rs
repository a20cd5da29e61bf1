use crate::cli::Cli;
use crate::config::{load_config_file, resolve_api_key, API_KEY_VAR};
use crate::errors::AppError;
use crate::logging::{init_logging, LogConfig};
use crate::realtor::{RealtorClient, RealtorRentals};
use crate::rent::RentEstimator;
use clap::Parser;
use std::io::{self, IsTerminal};

mod analysis;
mod cli;
mod config;
mod domain;
mod errors;
mod logging;
mod realtor;
mod render;
mod rent;
mod sources;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_args(cli.log_level, cli.log_format)
        .with_ansi(io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("ERROR: cannot initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    cli.validate()?;

    // Key precedence: flag, environment, config file.
    let file_config = load_config_file(&cli.api.config_file)?;
    let env_key = std::env::var(API_KEY_VAR).ok();
    let api_key = resolve_api_key(
        cli.api.rapidapi_key.as_deref(),
        env_key.as_deref(),
        &file_config,
    );
    let client = RealtorClient::new(cli.api.rapidapi_host.clone(), api_key)?;

    let listings = sources::load_listings(
        cli.source,
        cli.listings_csv.as_deref(),
        &client,
        &cli.api,
        &cli.filters,
        &cli.preferences,
    )?;

    let mut estimator = build_estimator(cli, client)?;

    let recommendations = analysis::recommend(
        &listings,
        &cli.filters,
        &cli.underwriting,
        &cli.preferences,
        &mut estimator,
    )?;

    let stdout = io::stdout();
    render::render_report(
        &mut stdout.lock(),
        &recommendations,
        &cli.filters.location,
        cli.filters.max_price,
    )
    .map_err(|e| AppError::Output(e.to_string()))?;

    if let Some(path) = &cli.export_xlsx {
        spreadsheets::export_analyses_xlsx(&recommendations, path)?;
    }
    Ok(())
}

/// Wires comp sources into the estimator according to `--rent-source`.
fn build_estimator(cli: &Cli, client: RealtorClient) -> Result<RentEstimator, AppError> {
    let rent = &cli.rent;
    let mut estimator = RentEstimator::new(rent.rent_source, rent.min_rent_comps);

    if rent.rent_source.uses_csv() {
        if let Some(path) = &rent.rental_comps_csv {
            estimator = estimator.with_csv_comps(sources::load_rental_comps_csv(path)?);
        }
    }

    if rent.rent_source.uses_api() {
        estimator = estimator.with_api_source(Box::new(RealtorRentals::new(
            client,
            rent.rapidapi_rent_endpoint.clone(),
            rent.rapidapi_rent_method,
            rent.rapidapi_rent_location_param.clone(),
            rent.rapidapi_rent_limit,
        )));
    }
    Ok(estimator)
}
