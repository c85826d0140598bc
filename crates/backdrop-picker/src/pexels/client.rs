//! Pexels client struct, request building, and response parsing.

use crate::{ProviderError, SearchQuery, SearchResult};

use super::config::PexelsClientConfig;

/// Pexels API client.
pub struct PexelsClient {
    pub(crate) config: PexelsClientConfig,
    pub(crate) http: reqwest::Client,
}

impl PexelsClient {
    pub fn new(config: PexelsClientConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub(crate) fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    /// Query-string pairs for one search request.
    pub(crate) fn query_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.term.clone()),
            ("orientation", SearchQuery::ORIENTATION.to_string()),
            ("size", SearchQuery::SIZE_CLASS.to_string()),
            ("per_page", query.per_page.to_string()),
            ("page", query.page.to_string()),
        ]
    }
}

/// Parse a search response body.
///
/// A body without a `photos` array means nothing matched. Entries that do not
/// decode are skipped rather than failing the whole page.
pub fn parse_search_response(json: serde_json::Value) -> Result<Vec<SearchResult>, ProviderError> {
    if !json.is_object() {
        return Err(ProviderError::Parse("response is not a JSON object".into()));
    }

    let photos = match json.get("photos") {
        Some(serde_json::Value::Array(photos)) => photos,
        Some(_) => return Err(ProviderError::Parse("'photos' is not an array".into())),
        None => return Ok(Vec::new()),
    };

    Ok(photos
        .iter()
        .filter_map(|photo| serde_json::from_value(photo.clone()).ok())
        .collect())
}
