//! SEO metadata endpoints.

use reqwest::Client;

use crate::endpoints::send;
use crate::error::{ClientError, Result};
use crate::models::{ContentType, SeoSource};

/// Fetch the SEO-bearing fields of the first page or post matching a slug.
///
/// Returns `Ok(None)` when the slug matches nothing. The rest of the item
/// payload is not deserialized; only the Yoast fields are extracted.
pub async fn get_seo_source(
    client: &Client,
    api_url: &str,
    slug: &str,
    content_type: ContentType,
) -> Result<Option<SeoSource>> {
    let url = format!("{}/{}", api_url, content_type.collection());

    let builder = client.get(&url).query(&[("slug", slug)]);
    let response = send(builder).await?;

    let items: Vec<serde_json::Value> = response.json().await?;
    let Some(item) = items.into_iter().next() else {
        return Ok(None);
    };

    let source: SeoSource = serde_json::from_value(item)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse SEO fields: {}", e)))?;

    Ok(Some(source))
}
