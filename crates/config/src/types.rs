//! Configuration types.

/// Resolved configuration for the WordPress gateways.
///
/// Both URLs are normalized (no trailing slash) and validated by
/// [`ConfigLoader::build`](crate::ConfigLoader::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST API root, e.g. `http://web.ruth/wp-json/wp/v2`.
    pub api_url: String,
    /// Site root, e.g. `http://web.ruth`. Routes outside the `wp/v2`
    /// namespace (menus, site info, review widgets) hang off this.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: crate::constants::DEFAULT_API_URL.to_string(),
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
        }
    }
}
