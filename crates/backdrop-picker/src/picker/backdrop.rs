//! Fallback-aware wrappers around `select_next`.

use tracing::{info, warn};

use crate::SelectionError;

use super::selector::ImagePicker;

/// What the page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backdrop {
    Photo(String),
    /// The static gradient. No remote image is available.
    Fallback,
}

impl ImagePicker {
    /// What is in effect right now.
    pub fn backdrop(&self) -> Backdrop {
        match (&self.current, self.remote) {
            (Some(url), true) => Backdrop::Photo(url.clone()),
            _ => Backdrop::Fallback,
        }
    }

    /// Initial load. Any failure puts the fallback in effect.
    pub async fn load(&mut self) -> Backdrop {
        match self.select_next().await {
            Ok(url) => Backdrop::Photo(url),
            Err(e) => {
                log_failure("load", &e);
                self.remote = false;
                Backdrop::Fallback
            }
        }
    }

    /// Manual refresh. Without a credential this is a no-op; on failure the
    /// previous selection stays in effect.
    pub async fn refresh(&mut self) -> Backdrop {
        if !self.has_credential() {
            return self.backdrop();
        }
        match self.select_next().await {
            Ok(url) => Backdrop::Photo(url),
            Err(e) => {
                log_failure("refresh", &e);
                self.backdrop()
            }
        }
    }
}

/// Transient failures are worth a warning; a missing key is an expected setup.
fn log_failure(stage: &str, error: &SelectionError) {
    if error.is_transient() {
        warn!(stage, "background image unavailable: {error}");
    } else {
        info!(stage, "{error}, using fallback background");
    }
}
