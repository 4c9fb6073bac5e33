//! Review widget endpoints.

use reqwest::Client;

use crate::endpoints::send;
use crate::error::Result;
use crate::models::{Testimonial, WidgetResponse};

/// Widget instance id registered by the backend plugin.
const REVIEWS_WIDGET_ID: u32 = 1;

/// Fetch the TripAdvisor widget payload: structured reviews and/or a raw
/// HTML blob, depending on what the backend has cached.
pub async fn get_review_widget(client: &Client, base_url: &str) -> Result<WidgetResponse> {
    let url = format!("{}/wp-json/ruth-amazon/v1/tripadvisor-widget", base_url);

    let builder = client.get(&url).query(&[("id", REVIEWS_WIDGET_ID)]);
    let response = send(builder).await?;

    Ok(response.json().await?)
}

/// Fetch testimonials from the dedicated REST collection.
pub async fn list_testimonials(client: &Client, api_url: &str) -> Result<Vec<Testimonial>> {
    let url = format!("{}/testimonials", api_url);

    let response = send(client.get(&url)).await?;

    Ok(response.json().await?)
}
