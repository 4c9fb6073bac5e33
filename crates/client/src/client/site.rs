//! Site metadata gateway methods for [`WpClient`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;
use crate::models::{ApiIndex, SiteIcons, SiteInfo};

/// Matches the image extension at the end of an icon URL.
/// Pattern is a compile-time constant that is known to be valid.
static ICON_EXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.(png|jpe?g)$").unwrap());

impl WpClient {
    /// Fetch site-level metadata, or `None` when the call fails.
    ///
    /// Missing name/description default to empty strings and missing
    /// URLs to the configured site root, so a sparse API index still
    /// yields a usable record.
    pub async fn site_info(&self) -> Option<SiteInfo> {
        match endpoints::get_site_info(&self.http, &self.base_url).await {
            Ok(index) => Some(self.build_site_info(index)),
            Err(e) => {
                warn!(error = %e, "failed to fetch site info");
                None
            }
        }
    }

    fn build_site_info(&self, index: ApiIndex) -> SiteInfo {
        let icon = match index.site_icon_url.as_deref() {
            Some(icon_url) if !icon_url.is_empty() => SiteIcons {
                favicon: icon_url.to_string(),
                icon_192: Some(icon_variant(icon_url, 192)),
                icon_512: Some(icon_variant(icon_url, 512)),
            },
            _ => SiteIcons {
                favicon: format!("{}/wp-content/uploads/fbrfg/favicon.ico", self.base_url),
                icon_192: None,
                icon_512: None,
            },
        };

        SiteInfo {
            name: index.name,
            description: index.description,
            url: index.url.unwrap_or_else(|| self.base_url.clone()),
            home: index.home.unwrap_or_else(|| self.base_url.clone()),
            icon,
        }
    }
}

/// Derive a sized icon variant by inserting `-{size}x{size}` before the
/// file extension. URLs without a recognized image extension are returned
/// unchanged.
fn icon_variant(icon_url: &str, size: u32) -> String {
    let replacement = format!("-{size}x{size}.${{1}}");
    ICON_EXT_RE.replace(icon_url, replacement.as_str()).into_owned()
}
