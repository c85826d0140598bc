//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Default Pexels REST endpoint.
pub const DEFAULT_PEXELS_BASE_URL: &str = "https://api.pexels.com/v1";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub pexels: PexelsConfig,
    pub logging: LoggingConfig,
}

/// Image search settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PexelsConfig {
    /// API key. Absent or blank means no remote calls are ever made.
    pub api_key: Option<String>,
    /// Search terms to draw from. Empty selects the built-in catalog.
    pub queries: Vec<String>,
    /// Highest result page to request (pages start at 1).
    pub max_page: u32,
    /// Highest page size to request.
    pub max_per_page: u32,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl std::fmt::Debug for PexelsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("queries", &self.queries.len())
            .field("max_page", &self.max_page)
            .field("max_per_page", &self.max_per_page)
            .field("timeout_secs", &self.timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for PexelsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            queries: Vec::new(),
            max_page: 10,
            max_per_page: 15,
            timeout_secs: 15,
            base_url: DEFAULT_PEXELS_BASE_URL.into(),
        }
    }
}

impl PexelsConfig {
    /// The API key, treating blank strings as absent.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
