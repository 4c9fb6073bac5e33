//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `WORDPRESS_*` environment variables and apply them to a
//!   `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Values already set on the loader (CLI overrides) are not replaced.

use super::builder::ConfigLoader;

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values set explicitly on the loader (e.g. from CLI flags) win over the
/// environment.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.api_url().is_none() {
        if let Some(url) = env_var_or_none("WORDPRESS_API_URL") {
            loader.set_api_url(Some(url));
        }
    }
    if loader.base_url().is_none() {
        if let Some(url) = env_var_or_none("WORDPRESS_BASE_URL") {
            loader.set_base_url(Some(url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_var_or_none_filters_empty_and_whitespace() {
        let key = "_WP_TEST_ENV_VAR";

        assert!(env_var_or_none(key).is_none(), "unset var should be None");

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "empty var should be None");
        });

        temp_env::with_vars([(key, Some("   "))], || {
            assert!(
                env_var_or_none(key).is_none(),
                "whitespace-only var should be None"
            );
        });

        temp_env::with_vars([(key, Some(" http://cms.local "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some("http://cms.local".to_string()),
                "value should be trimmed"
            );
        });
    }

    #[test]
    #[serial]
    fn apply_env_respects_existing_loader_values() {
        temp_env::with_vars(
            [("WORDPRESS_API_URL", Some("http://from-env/wp-json/wp/v2"))],
            || {
                let mut loader = ConfigLoader::new().with_api_url("http://from-cli".to_string());
                apply_env(&mut loader);
                assert_eq!(loader.api_url(), Some("http://from-cli"));
            },
        );
    }
}
