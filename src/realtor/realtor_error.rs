use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtorApiError {
    #[error(
        "RapidAPI key is required. Use --rapidapi-key, RAPIDAPI_KEY env var, or set RAPIDAPI_KEY in config file."
    )]
    MissingApiKey,
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl RealtorApiError {
    /// Errors that retrying with another data source cannot fix.
    pub fn is_config(&self) -> bool {
        matches!(self, RealtorApiError::MissingApiKey)
    }
}
