//! Page gateway methods for [`WpClient`].

use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;
use crate::models::Page;

impl WpClient {
    /// Fetch all pages.
    ///
    /// Returns an empty list when the backend is unreachable or answers
    /// with an error.
    pub async fn pages(&self) -> Vec<Page> {
        match endpoints::list_pages(&self.http, &self.api_url).await {
            Ok(pages) => pages,
            Err(e) => {
                warn!(error = %e, "failed to fetch pages");
                Vec::new()
            }
        }
    }

    /// Fetch the page with the given slug, or `None` if no page matches
    /// or the call fails.
    pub async fn page_by_slug(&self, slug: &str) -> Option<Page> {
        match endpoints::get_page_by_slug(&self.http, &self.api_url, slug).await {
            Ok(page) => page,
            Err(e) => {
                warn!(slug, error = %e, "failed to fetch page");
                None
            }
        }
    }
}
