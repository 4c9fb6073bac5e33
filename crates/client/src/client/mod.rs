//! The WordPress gateway client and its API methods.
//!
//! [`WpClient`] is the public surface of this crate. Each method performs
//! one request through [`crate::endpoints`] and degrades to its
//! documented default on any failure: the error is logged at `warn` level
//! and never propagated to the caller. Code that needs to distinguish
//! failures can call the endpoint functions directly.
//!
//! # Submodules
//! - [`builder`]: client construction
//! - `pages` / `posts` / `media` / `menus` / `site` / `seo`: content
//!   gateway methods
//! - `reviews`: review gateway methods
//!
//! # Invariants
//! - Every gateway method makes at most one outbound call.
//! - No state is shared between calls beyond the connection pool inside
//!   `reqwest::Client`.

pub mod builder;

mod media;
mod menus;
mod pages;
mod posts;
mod reviews;
mod seo;
mod site;

/// WordPress REST API gateway client.
///
/// Create one with [`WpClient::builder()`]:
///
/// ```rust,ignore
/// use wp_client::WpClient;
/// use wp_config::Config;
///
/// let config = Config::default();
/// let client = WpClient::builder().from_config(&config).build()?;
/// let pages = client.pages().await; // [] if the backend is down
/// ```
#[derive(Debug, Clone)]
pub struct WpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_url: String,
    pub(crate) base_url: String,
}

impl WpClient {
    /// Create a new client builder.
    pub fn builder() -> builder::WpClientBuilder {
        builder::WpClientBuilder::new()
    }

    /// The REST API root this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The site root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
