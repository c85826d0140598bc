//! Pexels client configuration.

use std::time::Duration;

pub(crate) const PEXELS_API_BASE: &str = "https://api.pexels.com/v1";

/// Pexels client configuration. Carries no secrets; the credential is
/// supplied per request by the picker.
#[derive(Debug, Clone)]
pub struct PexelsClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for PexelsClientConfig {
    fn default() -> Self {
        Self {
            base_url: PEXELS_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(15),
        }
    }
}

impl PexelsClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
