//! Search request and result types shared by providers and the picker.

use std::fmt;

use serde::Deserialize;

/// API token sent with every search request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens yield `None`, as an unset key would.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// One search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    /// 1-based result page.
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    /// Every request asks for landscape photos.
    pub const ORIENTATION: &'static str = "landscape";
    /// Minimum source resolution class requested from the provider.
    pub const SIZE_CLASS: &'static str = "small";

    pub fn new(term: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self {
            term: term.into(),
            page,
            per_page,
        }
    }
}

/// Provider-assigned photo identifier.
///
/// Pexels sends integers; other providers (and test fakes) may use strings.
/// The two kinds never compare equal, so `1` and `"1"` are distinct photos.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum PhotoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoId::Number(n) => write!(f, "{n}"),
            PhotoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        PhotoId::Text(id.to_string())
    }
}

impl From<u64> for PhotoId {
    fn from(id: u64) -> Self {
        PhotoId::Number(id)
    }
}

/// Named URL variants of one photo. Only the ones the picker uses are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhotoSources {
    #[serde(default)]
    pub large2x: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

/// One candidate returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub id: PhotoId,
    #[serde(default)]
    pub src: PhotoSources,
}

impl SearchResult {
    pub fn new(id: impl Into<PhotoId>, src: PhotoSources) -> Self {
        Self { id: id.into(), src }
    }

    /// Highest-resolution variant present: large2x, then large, then medium.
    pub fn best_url(&self) -> Option<&str> {
        self.src
            .large2x
            .as_deref()
            .or(self.src.large.as_deref())
            .or(self.src.medium.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_is_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("  \t").is_none());
        assert_eq!(Credential::new(" key ").unwrap().expose(), "key");
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("secret-token").unwrap();
        assert_eq!(format!("{credential:?}"), "Credential([REDACTED])");
    }

    #[test]
    fn query_requests_landscape_small() {
        assert_eq!(SearchQuery::ORIENTATION, "landscape");
        assert_eq!(SearchQuery::SIZE_CLASS, "small");
    }

    #[test]
    fn photo_id_accepts_numbers_and_strings() {
        let numeric: SearchResult = serde_json::from_str(r#"{"id": 2014422, "src": {}}"#).unwrap();
        assert_eq!(numeric.id, PhotoId::from(2014422u64));

        let text: SearchResult = serde_json::from_str(r#"{"id": "a", "src": {}}"#).unwrap();
        assert_eq!(text.id, PhotoId::from("a"));
    }

    #[test]
    fn numeric_and_text_ids_stay_distinct() {
        let numeric: SearchResult = serde_json::from_str(r#"{"id": 1, "src": {}}"#).unwrap();
        let text: SearchResult = serde_json::from_str(r#"{"id": "1", "src": {}}"#).unwrap();
        assert_ne!(numeric.id, text.id);
        assert_eq!(numeric.id.to_string(), text.id.to_string());
    }

    #[test]
    fn best_url_prefers_large2x() {
        let result = SearchResult::new(
            "a",
            PhotoSources {
                large2x: Some("x2".into()),
                large: Some("l".into()),
                medium: Some("m".into()),
            },
        );
        assert_eq!(result.best_url(), Some("x2"));
    }

    #[test]
    fn best_url_falls_through_missing_variants() {
        let result = SearchResult::new(
            "a",
            PhotoSources {
                large2x: None,
                large: None,
                medium: Some("m".into()),
            },
        );
        assert_eq!(result.best_url(), Some("m"));

        let bare = SearchResult::new("b", PhotoSources::default());
        assert_eq!(bare.best_url(), None);
    }
}
