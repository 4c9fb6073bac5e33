//! Post endpoints.

use reqwest::Client;
use wp_config::constants::DEFAULT_PAGE_SIZE;

use crate::endpoints::send;
use crate::error::Result;
use crate::models::Post;

/// List all posts, bounded by the default page size.
pub async fn list_posts(client: &Client, api_url: &str) -> Result<Vec<Post>> {
    let url = format!("{}/posts", api_url);

    let builder = client.get(&url).query(&[("per_page", DEFAULT_PAGE_SIZE)]);
    let response = send(builder).await?;

    Ok(response.json().await?)
}

/// Get the first post matching a slug, if any.
pub async fn get_post_by_slug(client: &Client, api_url: &str, slug: &str) -> Result<Option<Post>> {
    let url = format!("{}/posts", api_url);

    let builder = client.get(&url).query(&[("slug", slug)]);
    let response = send(builder).await?;

    let posts: Vec<Post> = response.json().await?;
    Ok(posts.into_iter().next())
}
