//! wp-cli - Command-line dump tool for the WordPress gateways.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute one gateway operation via the shared client library.
//! - Print the result as pretty JSON on stdout.
//!
//! Does NOT handle:
//! - Core gateway logic or REST calls (see `crates/client`).
//! - Rendering; this binary exists so the output of every gateway can be
//!   inspected from a shell or a build script.
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.
//! - A gateway that degraded to its default still exits 0; the gateway
//!   contract has no failure mode to report.

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wp_config::ConfigLoader;

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = commands::run(cli).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
