//! Configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod pexels;

#[cfg(test)]
mod tests;

use crate::schema::BackdropConfig;
use backdrop_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BackdropConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    pexels::validate_pexels(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
