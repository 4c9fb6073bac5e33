//! Configuration for the headless WordPress gateways.
//!
//! This crate provides the `Config` type holding the two base URLs the
//! gateways talk to, and a loader that merges hardcoded defaults,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::Config;
