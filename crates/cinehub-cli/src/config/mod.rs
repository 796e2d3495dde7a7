//! Application configuration module.
//!
//! Manages the TOML config file holding API connection settings.

#[allow(clippy::module_inception)]
mod config;

pub use config::AppConfig;
