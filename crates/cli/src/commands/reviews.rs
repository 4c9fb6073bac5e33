//! Review gateway commands.

use anyhow::Result;
use wp_client::WpClient;

use super::print_json;

pub async fn reviews(client: &WpClient, html: bool) -> Result<()> {
    if html {
        // raw blob for embedding, not JSON
        println!("{}", client.tripadvisor_widget_html().await);
        return Ok(());
    }
    print_json(&client.tripadvisor_reviews().await)
}

pub async fn testimonials(client: &WpClient) -> Result<()> {
    print_json(&client.testimonials().await)
}
