//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wp-cli")]
#[command(about = "Dump WordPress gateway data as JSON", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  wp-cli pages\n  wp-cli posts --slug expedicion-pacaya-samiria\n  wp-cli menu footer\n  wp-cli seo nosotros\n  wp-cli reviews --html\n  wp-cli --base-url http://localhost:8080 site\n"
)]
pub struct Cli {
    /// REST API root (e.g. http://web.ruth/wp-json/wp/v2)
    #[arg(long, global = true, env = "WORDPRESS_API_URL")]
    pub api_url: Option<String>,

    /// Site root for non-wp/v2 routes (e.g. http://web.ruth)
    #[arg(long, global = true, env = "WORDPRESS_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all pages, or fetch one by slug
    Pages {
        /// Fetch only the page with this slug
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List all posts, or fetch one by slug
    Posts {
        /// Fetch only the post with this slug
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Resolve a media attachment id to its source URL
    Media {
        /// Attachment id (0 resolves to null without a request)
        id: u64,
    },

    /// Print the items of a navigation menu
    Menu {
        /// Menu slug
        #[arg(default_value = wp_config::constants::DEFAULT_MENU_SLUG)]
        slug: String,
    },

    /// Print site metadata with derived icon URLs
    Site,

    /// Print SEO metadata for a slug
    Seo {
        /// Page or post slug
        slug: String,

        /// Resolve against the posts collection instead of pages
        #[arg(long)]
        posts: bool,
    },

    /// Print TripAdvisor reviews (hardcoded samples when unavailable)
    Reviews {
        /// Print the raw widget HTML instead of structured reviews
        #[arg(long)]
        html: bool,
    },

    /// Print the testimonials collection
    Testimonials,
}
