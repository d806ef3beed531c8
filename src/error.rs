//! Error Types

use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("server returned {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("cannot build request URL from base {0}")]
    InvalidUrl(String),
}

/// Errors in the startup configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid backend URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("backend URL {0:?} cannot carry a path")]
    NotABase(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
