//! Backend API Client
//!
//! HTTP bindings to the projects REST backend, organized by resource.

mod projects;

use reqwest::{Client, RequestBuilder, Response, Url};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the projects backend
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    base_url: Url,
    http: Client,
}

impl ProjectsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            http: Client::new(),
        }
    }

    /// Resolve `segments` below the base URL, one path segment each.
    ///
    /// Segments are percent-encoded, so an identifier containing `/` stays
    /// a single segment.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and reject non-success statuses
    async fn execute(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        log::debug!("{method} {url}");

        let response = request.send().await.map_err(ApiError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
