//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration
//!   merging: hardcoded defaults, then environment, then explicit setters.
//! - Build the final `Config`, validating and normalizing both URLs.
//!
//! Does NOT handle:
//! - Direct environment variable parsing (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - Both URLs fall back to the hardcoded defaults, so `build()` cannot
//!   fail for a missing value, only for an unparseable one.

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_API_URL, DEFAULT_BASE_URL};
use crate::types::Config;

/// Configuration loader that builds a [`Config`] from environment
/// variables and explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    base_url: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the `.env` file is
    /// not loaded (useful for testing). A missing `.env` file is silently
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// or cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from the `WORDPRESS_API_URL` and
    /// `WORDPRESS_BASE_URL` environment variables.
    ///
    /// Values already set via `with_*` (CLI overrides) are kept.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the REST API root URL.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the site root URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub(crate) fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub(crate) fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    /// Build the final configuration.
    ///
    /// Missing values fall back to the hardcoded defaults. Both URLs are
    /// validated and stripped of trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if a configured value does not
    /// parse as an absolute URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_url = validate_and_normalize(
            self.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
            "WORDPRESS_API_URL",
        )?;
        let base_url = validate_and_normalize(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            "WORDPRESS_BASE_URL",
        )?;

        Ok(Config { api_url, base_url })
    }
}

/// Validate a URL and strip trailing slashes so endpoint paths can be
/// appended without producing double slashes.
fn validate_and_normalize(raw: &str, var: &str) -> Result<String, ConfigError> {
    url::Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        var: var.to_string(),
        message: e.to_string(),
    })?;
    Ok(raw.trim_end_matches('/').to_string())
}
