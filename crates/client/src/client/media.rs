//! Media gateway methods for [`WpClient`].

use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;

impl WpClient {
    /// Resolve a featured-media reference to its source URL.
    ///
    /// Returns `None` without touching the network when the reference is
    /// absent (WordPress serves `0` for "no featured image"), and `None`
    /// when the lookup fails or the attachment has no usable URL.
    pub async fn featured_image_url(&self, media_id: Option<u64>) -> Option<String> {
        let media_id = media_id.filter(|&id| id != 0)?;

        match endpoints::get_media(&self.http, &self.api_url, media_id).await {
            Ok(media) if !media.source_url.is_empty() => Some(media.source_url),
            Ok(_) => None,
            Err(e) => {
                warn!(media_id, error = %e, "failed to fetch media");
                None
            }
        }
    }
}
