use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SEARCH_QUERY};
use crate::domain::errors::config_error::ConfigError;
use std::time::Duration;

pub const ACCESS_TOKEN_VAR: &str = "LOOP_ACCESS_TOKEN";
pub const BASE_URL_VAR: &str = "LOOP_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "LOOP_REQUEST_TIMEOUT_SECS";
pub const DEFAULT_QUERY_VAR: &str = "LOOP_DEFAULT_QUERY";

/// Connection settings for the video-hosting API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub access_token: String,
    pub timeout: Duration,
    pub default_query: String,
}

impl ApiSettings {
    /// Loads the settings from the process environment, which `main` has already
    /// completed with the optional `.env` file.
    ///
    /// # Errors
    ///
    /// See [`ApiSettings::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup.
    ///
    /// Only the access token is mandatory; everything else falls back to the defaults
    /// from [`constants`](crate::config::constants).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - the access token is missing or blank,
    /// - the timeout is not a positive whole number of seconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingVariable(ACCESS_TOKEN_VAR))?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => parse_timeout(value)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let default_query = lookup(DEFAULT_QUERY_VAR)
            .map(|query| query.trim().to_string())
            .filter(|query| !query.is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string());

        Ok(Self {
            base_url,
            access_token,
            timeout,
            default_query,
        })
    }
}

fn parse_timeout(value: String) -> Result<Duration, ConfigError> {
    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(0) => Err(ConfigError::NotPositive(TIMEOUT_VAR)),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(source) => Err(ConfigError::InvalidNumber {
            variable: TIMEOUT_VAR,
            value,
            source,
        }),
    }
}
