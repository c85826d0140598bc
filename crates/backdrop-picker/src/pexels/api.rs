//! ImageSearch trait implementation for PexelsClient.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::debug;

use crate::{Credential, ImageSearch, ProviderError, SearchQuery, SearchResult};

use super::client::{parse_search_response, PexelsClient};

#[async_trait]
impl ImageSearch for PexelsClient {
    async fn search(
        &self,
        credential: &Credential,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let auth = HeaderValue::from_str(credential.expose())
            .map_err(|_| ProviderError::InvalidCredential)?;

        debug!(
            term = %query.term,
            page = query.page,
            per_page = query.per_page,
            "Pexels search request"
        );

        let response = self
            .http
            .get(self.search_url())
            .header(AUTHORIZATION, auth)
            .query(&Self::query_params(query))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = text.chars().take(200).collect::<String>();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let results = parse_search_response(json)?;
        debug!(count = results.len(), "Pexels search response");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PexelsClientConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer exactly one request with a canned response and hand back the
    /// raw request text.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{addr}/v1"), handle)
    }

    fn client(base_url: String) -> PexelsClient {
        PexelsClient::new(PexelsClientConfig::default().with_base_url(base_url)).unwrap()
    }

    fn credential() -> Credential {
        Credential::new("test-key").unwrap()
    }

    #[tokio::test]
    async fn sends_key_and_query_then_parses_photos() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"photos":[{"id":42,"src":{"large":"https://img/42.jpeg"}}]}"#,
        )
        .await;

        let results = client(base_url)
            .search(&credential(), &SearchQuery::new("ocean", 3, 7))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].best_url(), Some("https://img/42.jpeg"));

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /v1/search?"));
        assert!(request_line.contains("query=ocean"));
        assert!(request_line.contains("orientation=landscape"));
        assert!(request_line.contains("size=small"));
        assert!(request_line.contains("per_page=7"));
        assert!(request_line.contains("page=3"));
        assert!(request.to_ascii_lowercase().contains("authorization: test-key"));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (base_url, server) =
            serve_once("HTTP/1.1 401 Unauthorized", r#"{"error":"bad key"}"#).await;

        let err = client(base_url)
            .search(&credential(), &SearchQuery::new("sky", 1, 1))
            .await
            .unwrap_err();
        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("bad key"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", "not json").await;

        let err = client(base_url)
            .search(&credential(), &SearchQuery::new("sky", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/v1"))
            .search(&credential(), &SearchQuery::new("sky", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }

    #[tokio::test]
    async fn header_unsafe_key_is_rejected_before_sending() {
        let credential = Credential::new("bad\nkey").unwrap();
        let err = client("http://127.0.0.1:9/v1".to_string())
            .search(&credential, &SearchQuery::new("sky", 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCredential));
    }
}
