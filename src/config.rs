//! Optional `KEY=VALUE` config file and API key resolution.

use crate::errors::ConfigError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".house_hunter.env";
pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";

/// Parses `KEY=VALUE` lines. Blank lines, `#` comments and lines without
/// `=` are skipped; surrounding quotes are stripped from values.
pub fn parse_config(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

/// A missing file is an empty config, not an error.
pub fn load_config_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parse_config(&contents))
}

/// First of: the CLI flag, the environment variable, the config file.
/// Empty values are treated as unset.
pub fn resolve_api_key(
    cli_key: Option<&str>,
    env_key: Option<&str>,
    config: &HashMap<String, String>,
) -> Option<String> {
    [cli_key, env_key, config.get(API_KEY_VAR).map(String::as_str)]
        .into_iter()
        .flatten()
        .find(|k| !k.is_empty())
        .map(str::to_string)
}
