// errors.rs
use crate::realtor::RealtorApiError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading local CSV inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },
    #[error("cannot parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Invalid combinations of command-line options or config file contents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    MissingArgument(String),
    #[error("cannot read config file {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// Everything that can abort a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Api(#[from] RealtorApiError),
    #[error("RapidAPI for-sale request failed. Verify host/endpoint, subscription status, API key, and network access. ({0})")]
    SaleSearch(RealtorApiError),
    #[error("Spreadsheet error: {0}")]
    Xlsx(String),
    #[error("cannot write report: {0}")]
    Output(String),
}
