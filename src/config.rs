//! Runtime Configuration
//!
//! The backend base URL is baked in at build time from `BACKEND_URL`.

use reqwest::Url;

use crate::error::ConfigError;

/// Backend used when `BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base that `api/projects` is resolved against
    pub backend_url: Url,
}

impl Config {
    /// Read the configuration captured from the build environment.
    ///
    /// An unset or blank `BACKEND_URL` yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        match option_env!("BACKEND_URL") {
            Some(value) if !value.trim().is_empty() => Self::parse(value),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a backend base URL. Query and fragment are dropped.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut backend_url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        if backend_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(value.to_string()));
        }

        backend_url.set_query(None);
        backend_url.set_fragment(None);

        Ok(Self { backend_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
        }
    }
}
