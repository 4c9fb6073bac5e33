//! Site information endpoint.

use reqwest::Client;

use crate::endpoints::send;
use crate::error::Result;
use crate::models::ApiIndex;

/// Get the API index at the site root, which carries the site name,
/// description, URLs, and icon.
pub async fn get_site_info(client: &Client, base_url: &str) -> Result<ApiIndex> {
    let url = format!("{}/wp-json", base_url);

    let response = send(client.get(&url)).await?;

    Ok(response.json().await?)
}
