//! Media endpoints.

use reqwest::Client;

use crate::endpoints::send;
use crate::error::Result;
use crate::models::Media;

/// Get a media attachment by id.
pub async fn get_media(client: &Client, api_url: &str, media_id: u64) -> Result<Media> {
    let url = format!("{}/media/{}", api_url, media_id);

    let response = send(client.get(&url)).await?;

    Ok(response.json().await?)
}
