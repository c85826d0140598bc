//! Backdrop configuration system.
//!
//! TOML-based configuration with validation and an environment override
//! for the API key. All sections use defaults so partial configs work out
//! of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BackdropConfig, LogLevel, LoggingConfig, PexelsConfig};
pub use toml_loader::{load_from_path, API_KEY_ENV};

use backdrop_common::ConfigError;
use std::path::Path;

/// Load, apply the `PEXELS_API_KEY` override, and validate.
///
/// With `path` set, that file must exist. Without it, the platform default
/// path is used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<BackdropConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    toml_loader::apply_env_override(&mut config, std::env::var(API_KEY_ENV).ok());
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to pretty-printed JSON with the API key redacted.
pub fn config_to_json(config: &BackdropConfig) -> String {
    let mut redacted = config.clone();
    if redacted.pexels.api_key.is_some() {
        redacted.pexels.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
