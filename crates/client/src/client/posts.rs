//! Post gateway methods for [`WpClient`].

use tracing::warn;

use crate::client::WpClient;
use crate::endpoints;
use crate::models::Post;

impl WpClient {
    /// Fetch all posts.
    ///
    /// Returns an empty list when the backend is unreachable or answers
    /// with an error.
    pub async fn posts(&self) -> Vec<Post> {
        match endpoints::list_posts(&self.http, &self.api_url).await {
            Ok(posts) => posts,
            Err(e) => {
                warn!(error = %e, "failed to fetch posts");
                Vec::new()
            }
        }
    }

    /// Fetch the post with the given slug, or `None` if no post matches
    /// or the call fails.
    pub async fn post_by_slug(&self, slug: &str) -> Option<Post> {
        match endpoints::get_post_by_slug(&self.http, &self.api_url, slug).await {
            Ok(post) => post,
            Err(e) => {
                warn!(slug, error = %e, "failed to fetch post");
                None
            }
        }
    }
}
