//! Pexels photo search client.
//!
//! Implements the `ImageSearch` trait against the Pexels REST API
//! (https://api.pexels.com/v1/search). The API key goes verbatim into the
//! `Authorization` header.

mod api;
mod client;
mod config;

pub use client::{parse_search_response, PexelsClient};
pub use config::PexelsClientConfig;
