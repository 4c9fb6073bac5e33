//! SEO gateway methods for [`WpClient`].

use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;
use crate::models::{ContentType, SeoMetadata};
use crate::scrape::parse_head;

impl WpClient {
    /// Fetch the SEO metadata of the page or post with the given slug.
    ///
    /// Prefers the pre-structured `yoast_head_json` field; falls back to
    /// scraping the raw `yoast_head` fragment. Returns `None` when the
    /// slug matches nothing, neither field is present, or the call fails.
    pub async fn seo(&self, slug: &str, content_type: ContentType) -> Option<SeoMetadata> {
        let source =
            match endpoints::get_seo_source(&self.http, &self.api_url, slug, content_type).await {
                Ok(source) => source?,
                Err(e) => {
                    warn!(slug, ?content_type, error = %e, "failed to fetch SEO metadata");
                    return None;
                }
            };

        if let Some(seo) = source.yoast_head_json {
            return Some(seo);
        }

        source.yoast_head.map(|head| parse_head(&head))
    }
}
