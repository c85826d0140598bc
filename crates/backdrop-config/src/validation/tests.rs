//! Tests for the validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = BackdropConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_page() {
    let mut config = BackdropConfig::default();
    config.pexels.max_page = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.max_page"));
}

#[test]
fn catches_per_page_above_provider_limit() {
    let mut config = BackdropConfig::default();
    config.pexels.max_per_page = 81;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.max_per_page"));
}

#[test]
fn catches_zero_timeout() {
    let mut config = BackdropConfig::default();
    config.pexels.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.timeout_secs"));
}

#[test]
fn catches_blank_query() {
    let mut config = BackdropConfig::default();
    config.pexels.queries = vec!["ocean".into(), " ".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.queries[1]"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = BackdropConfig::default();
    config.pexels.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.base_url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = BackdropConfig::default();
    config.pexels.max_page = 0;
    config.pexels.max_per_page = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pexels.max_page"));
    assert!(err.contains("pexels.max_per_page"));
    assert!(err.contains("; "));
}
