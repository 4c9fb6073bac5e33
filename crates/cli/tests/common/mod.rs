//! Shared test utilities for wp-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`
//!   loading, no URL leakage from the host environment.
//! - The default URLs point at a closed local port, so commands exercise
//!   the degrade-to-default path unless a test overrides them.

use assert_cmd::Command;

/// Returns a hermetic `wp-cli` command for integration testing.
pub fn wp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wp-cli").expect("binary should build");

    // Hermeticity: prevent loading a local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Point at a closed port so nothing ever reaches a real backend
    cmd.env("WORDPRESS_API_URL", "http://127.0.0.1:9/wp-json/wp/v2");
    cmd.env("WORDPRESS_BASE_URL", "http://127.0.0.1:9");

    cmd
}
