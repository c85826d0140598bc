//! Core TOML config loading: read from path or platform default.

use crate::schema::BackdropConfig;
use backdrop_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};

/// Environment variable that overrides `[pexels].api_key`.
pub const API_KEY_ENV: &str = "PEXELS_API_KEY";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller so a half-valid file can still be
/// inspected.
pub fn load_from_path(path: &Path) -> Result<BackdropConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BackdropConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/backdrop/config.toml`
/// On Linux: `~/.config/backdrop/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<BackdropConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BackdropConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Replace the configured API key with `value` when it is non-blank.
///
/// The caller reads the environment (`std::env::var(API_KEY_ENV).ok()`);
/// keeping the lookup outside makes this testable without touching
/// process-wide state.
pub fn apply_env_override(config: &mut BackdropConfig, value: Option<String>) {
    if let Some(key) = value.filter(|v| !v.trim().is_empty()) {
        debug!("using API key from {API_KEY_ENV}");
        config.pexels.api_key = Some(key);
    }
}
