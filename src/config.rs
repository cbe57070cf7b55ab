//! Checker configuration.
//!
//! The backend base URL is resolved from the frontend env file, a
//! line-oriented `KEY=value` file. The checker only cares about one key:
//!
//! ```text
//! REACT_APP_BACKEND_URL=https://shop.example.com
//! ```
//!
//! A missing key, an empty value or an unparsable URL is a configuration
//! error, the only fatal error in the whole run.
use std::time::Duration;

use reqwest::Url as ServiceUrl;
use thiserror::Error;

/// The env file key holding the backend base URL.
pub const BACKEND_URL_KEY: &str = "REACT_APP_BACKEND_URL";

/// Maximum time the checker waits for each HTTP response. It bounds the
/// total run duration even against an unresponsive service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// It extracts the backend URL from the env file content and builds the
/// validated configuration.
///
/// Lines are scanned in order; the first `REACT_APP_BACKEND_URL=` entry
/// wins. Lines starting with `#` are comments. The value is everything
/// after the first `=`.
///
/// # Errors
///
/// Will return an error if the key is missing or its value is not a valid
/// base URL.
pub fn parse_from_env_file(content: &str) -> Result<Configuration, ConfigurationError> {
    let entry = content
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| line.strip_prefix(BACKEND_URL_KEY).and_then(|rest| rest.strip_prefix('=')))
        .ok_or(ConfigurationError::MissingBackendUrlKey { key: BACKEND_URL_KEY })?;

    Configuration::from_backend_url(entry)
}

/// Validated configuration with the endpoint URLs precomputed.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The backend base URL, without a trailing slash.
    pub backend_url: ServiceUrl,
    /// `<backend>/api/`, the greeting endpoint.
    pub api_root_url: ServiceUrl,
    /// `<backend>/api/status`, the status check collection endpoint.
    pub status_url: ServiceUrl,
}

impl Configuration {
    /// Builds the configuration from a raw backend base URL. Surrounding
    /// whitespace and trailing slashes are tolerated.
    ///
    /// # Errors
    ///
    /// Will return an error if the value is empty or not a valid URL.
    pub fn from_backend_url(raw: &str) -> Result<Self, ConfigurationError> {
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyBackendUrl { key: BACKEND_URL_KEY });
        }

        let backend_url = trimmed.parse::<ServiceUrl>().map_err(ConfigurationError::InvalidUrl)?;
        let api_root_url = format!("{trimmed}/api/").parse::<ServiceUrl>().map_err(ConfigurationError::InvalidUrl)?;
        let status_url = format!("{trimmed}/api/status")
            .parse::<ServiceUrl>()
            .map_err(ConfigurationError::InvalidUrl)?;

        Ok(Self {
            backend_url,
            api_root_url,
            status_url,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("could not find {key} in the env file")]
    MissingBackendUrlKey { key: &'static str },
    #[error("{key} is present but empty")]
    EmptyBackendUrl { key: &'static str },
    #[error("invalid backend URL: {0}")]
    InvalidUrl(url::ParseError),
}
