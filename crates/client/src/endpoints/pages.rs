//! Page endpoints.

use reqwest::Client;
use wp_config::constants::DEFAULT_PAGE_SIZE;

use crate::endpoints::send;
use crate::error::Result;
use crate::models::Page;

/// List all pages, bounded by the default page size.
pub async fn list_pages(client: &Client, api_url: &str) -> Result<Vec<Page>> {
    let url = format!("{}/pages", api_url);

    let builder = client.get(&url).query(&[("per_page", DEFAULT_PAGE_SIZE)]);
    let response = send(builder).await?;

    Ok(response.json().await?)
}

/// Get the first page matching a slug, if any.
///
/// WordPress answers slug filters with a list; zero matches is an empty
/// list, not an error.
pub async fn get_page_by_slug(client: &Client, api_url: &str, slug: &str) -> Result<Option<Page>> {
    let url = format!("{}/pages", api_url);

    let builder = client.get(&url).query(&[("slug", slug)]);
    let response = send(builder).await?;

    let pages: Vec<Page> = response.json().await?;
    Ok(pages.into_iter().next())
}
