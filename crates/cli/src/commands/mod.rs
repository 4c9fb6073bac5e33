//! Command implementations.

mod content;
mod reviews;

use anyhow::{Context, Result};
use serde::Serialize;
use wp_client::WpClient;
use wp_config::ConfigLoader;

use crate::args::{Cli, Commands};

/// Dispatch the parsed CLI invocation to its command implementation.
pub async fn run(cli: Cli) -> Result<()> {
    let client = build_client(cli.api_url, cli.base_url)?;

    match cli.command {
        Commands::Pages { slug } => content::pages(&client, slug).await,
        Commands::Posts { slug } => content::posts(&client, slug).await,
        Commands::Media { id } => content::media(&client, id).await,
        Commands::Menu { slug } => content::menu(&client, &slug).await,
        Commands::Site => content::site(&client).await,
        Commands::Seo { slug, posts } => content::seo(&client, &slug, posts).await,
        Commands::Reviews { html } => reviews::reviews(&client, html).await,
        Commands::Testimonials => reviews::testimonials(&client).await,
    }
}

fn build_client(api_url: Option<String>, base_url: Option<String>) -> Result<WpClient> {
    let mut loader = ConfigLoader::new();
    if let Some(url) = api_url {
        loader = loader.with_api_url(url);
    }
    if let Some(url) = base_url {
        loader = loader.with_base_url(url);
    }
    let config = loader
        .from_env()
        .build()
        .context("Failed to build configuration")?;

    WpClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build WordPress client")
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}
