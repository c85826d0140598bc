//! Config loading and hand-off to the picker through the readiness channel.

use std::path::PathBuf;
use std::time::Duration;

use backdrop_common::{ConfigError, Publisher};
use backdrop_config::toml_loader::apply_env_override;
use backdrop_config::BackdropConfig;
use backdrop_picker::{Credential, PexelsClientConfig, PickerSettings, SelectionPolicy};

/// Load config from `path`, or the platform default when absent.
pub fn load_config(path: Option<PathBuf>) -> Result<BackdropConfig, ConfigError> {
    backdrop_config::load_config(path.as_deref())
}

/// The loaded config, or defaults (and a warning) when loading failed.
///
/// `env_key` is the `PEXELS_API_KEY` value; it still applies to the defaults.
pub fn config_or_default(
    loaded: Result<BackdropConfig, ConfigError>,
    env_key: Option<String>,
) -> BackdropConfig {
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = BackdropConfig::default();
        apply_env_override(&mut config, env_key);
        config
    })
}

/// Picker settings derived from config.
pub fn picker_settings(config: &BackdropConfig) -> PickerSettings {
    PickerSettings {
        catalog: config.pexels.queries.clone(),
        credential: config.pexels.credential().and_then(Credential::new),
        policy: SelectionPolicy {
            max_page: config.pexels.max_page,
            max_per_page: config.pexels.max_per_page,
        },
    }
}

pub fn client_config(config: &BackdropConfig) -> PexelsClientConfig {
    PexelsClientConfig::default()
        .with_base_url(config.pexels.base_url.clone())
        .with_timeout(Duration::from_secs(config.pexels.timeout_secs))
}

/// Publish picker settings once config is available.
pub fn publish(publisher: Publisher<PickerSettings>, config: &BackdropConfig) {
    publisher.publish(picker_settings(config));
}
