//! Menu gateway methods for [`WpClient`].

use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;
use crate::models::MenuItem;

impl WpClient {
    /// Fetch the items of a named navigation menu.
    ///
    /// Returns an empty list when the menu does not exist, the menus
    /// plugin is not installed, or the call fails.
    pub async fn menu(&self, menu_slug: &str) -> Vec<MenuItem> {
        match endpoints::get_menu(&self.http, &self.base_url, menu_slug).await {
            Ok(items) => items,
            Err(e) => {
                warn!(menu_slug, error = %e, "failed to fetch menu");
                Vec::new()
            }
        }
    }
}
