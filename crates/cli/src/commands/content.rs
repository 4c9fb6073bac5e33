//! Content gateway commands: pages, posts, media, menus, site, SEO.

use anyhow::Result;
use tracing::info;
use wp_client::{ContentType, WpClient};

use super::print_json;

pub async fn pages(client: &WpClient, slug: Option<String>) -> Result<()> {
    match slug {
        Some(slug) => {
            info!(%slug, "fetching page");
            print_json(&client.page_by_slug(&slug).await)
        }
        None => {
            info!("fetching all pages");
            print_json(&client.pages().await)
        }
    }
}

pub async fn posts(client: &WpClient, slug: Option<String>) -> Result<()> {
    match slug {
        Some(slug) => {
            info!(%slug, "fetching post");
            print_json(&client.post_by_slug(&slug).await)
        }
        None => {
            info!("fetching all posts");
            print_json(&client.posts().await)
        }
    }
}

pub async fn media(client: &WpClient, id: u64) -> Result<()> {
    print_json(&client.featured_image_url(Some(id)).await)
}

pub async fn menu(client: &WpClient, slug: &str) -> Result<()> {
    info!(slug, "fetching menu");
    print_json(&client.menu(slug).await)
}

pub async fn site(client: &WpClient) -> Result<()> {
    print_json(&client.site_info().await)
}

pub async fn seo(client: &WpClient, slug: &str, posts: bool) -> Result<()> {
    let content_type = if posts {
        ContentType::Posts
    } else {
        ContentType::Pages
    };
    print_json(&client.seo(slug, content_type).await)
}
