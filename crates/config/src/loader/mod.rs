//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered merging
//!   (defaults < environment < explicit setters).
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` setters take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
