//! Client builder for constructing [`WpClient`] instances.
//!
//! Responsibilities:
//! - Provide a fluent builder API for client configuration.
//! - Validate that both base URLs are present.
//! - Normalize URLs (no trailing slashes) so endpoint paths concatenate
//!   cleanly.
//!
//! # Invariants
//! - `api_url` and `base_url` are required; `from_config` supplies both.

use crate::client::WpClient;
use crate::error::{ClientError, Result};
use wp_config::Config;

/// Builder for creating a new [`WpClient`].
#[derive(Debug, Default)]
pub struct WpClientBuilder {
    api_url: Option<String>,
    base_url: Option<String>,
}

impl WpClientBuilder {
    /// Create a new builder with no URLs set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the REST API root, e.g. `http://web.ruth/wp-json/wp/v2`.
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the site root, e.g. `http://web.ruth`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Take both URLs from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_url = Some(config.api_url.clone());
        self.base_url = Some(config.base_url.clone());
        self
    }

    /// Build the [`WpClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if either URL was not provided,
    /// and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<WpClient> {
        let api_url = self
            .api_url
            .ok_or_else(|| ClientError::InvalidUrl("api_url is required".to_string()))?;
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let http = reqwest::Client::builder().build()?;

        Ok(WpClient {
            http,
            api_url: normalize_url(api_url),
            base_url: normalize_url(base_url),
        })
    }
}

/// Strip trailing slashes so endpoint paths can be appended without
/// producing double slashes.
fn normalize_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
