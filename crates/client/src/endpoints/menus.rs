//! Navigation menu endpoints.
//!
//! WordPress does not expose menus in the core REST API; this targets the
//! route registered by the WP REST API Menus plugin under its own
//! versioned namespace.

use reqwest::Client;

use crate::endpoints::{encode_path_segment, send};
use crate::error::Result;
use crate::models::{MenuItem, MenuResponse};

/// Get the items of a named menu.
pub async fn get_menu(client: &Client, base_url: &str, menu_slug: &str) -> Result<Vec<MenuItem>> {
    let url = format!(
        "{}/wp-json/wp-api-menus/v2/menus/{}",
        base_url,
        encode_path_segment(menu_slug)
    );

    let response = send(client.get(&url)).await?;

    let menu: MenuResponse = response.json().await?;
    Ok(menu.items)
}
