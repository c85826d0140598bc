//! Background image selection for the site hero section.
//!
//! Provides:
//! - `ImagePicker`, which draws a random query, fetches one result page and
//!   picks a photo not shown before, resetting its memory once a page has
//!   nothing new to offer
//! - the `ImageSearch` seam plus a Pexels implementation
//! - injectable randomness for deterministic tests

pub mod catalog;
pub mod pexels;
pub mod picker;
pub mod random;
pub mod types;

use async_trait::async_trait;

pub use catalog::{default_catalog, DEFAULT_QUERIES};
pub use pexels::{PexelsClient, PexelsClientConfig};
pub use picker::{Backdrop, ImagePicker, PickerSettings, SelectionPolicy};
pub use random::{RandomSource, SequenceRandom, StdRandom};
pub use types::{Credential, PhotoId, PhotoSources, SearchQuery, SearchResult};

/// A remote image search capability.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Fetch one page of results for `query`.
    async fn search(
        &self,
        credential: &Credential,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("credential is not a valid header value")]
    InvalidCredential,
    #[error("client setup failed: {0}")]
    Client(String),
}

/// Why `ImagePicker::select_next` produced no image.
///
/// None of these are fatal; the caller shows its fallback.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("no API credential configured")]
    NoCredential,
    #[error("provider failure: {0}")]
    ProviderFailure(#[from] ProviderError),
    #[error("no results for '{term}'")]
    NoResults { term: String },
}

impl SelectionError {
    /// Whether a later retry could succeed without reconfiguration.
    pub fn is_transient(&self) -> bool {
        !matches!(self, SelectionError::NoCredential)
    }
}
