//! Books client implementation
//!
//! Wraps the `books_api` HTTP layer with the page sizes and proxy taken from
//! the user's settings.

use anyhow::Result;
use tracing::{debug, info};

use super::books_api::{BooksApi, DEFAULT_ENDPOINT, model::Volume};
use crate::features::settings::{SearchSettings, Settings};

/// Result count of a full search
pub const DEFAULT_MAX_RESULTS: u32 = 24;

/// Result count of a suggestion lookup
pub const DEFAULT_SUGGESTION_COUNT: u32 = 6;

/// Books API client with built-in page sizes
///
/// Callers only pass the query; the number of items fetched for searches and
/// suggestions comes from the client's configuration.
#[derive(Debug, Clone)]
pub struct BooksClient {
    api: BooksApi,
    max_results: u32,
    suggestion_count: u32,
}

impl BooksClient {
    pub fn new() -> Self {
        Self {
            api: BooksApi::new(DEFAULT_ENDPOINT),
            max_results: DEFAULT_MAX_RESULTS,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
        }
    }

    /// Create a client from search settings only (no proxy)
    pub fn from_search_settings(search: &SearchSettings) -> Self {
        Self {
            api: BooksApi::new(search.endpoint.clone()),
            max_results: search.max_results,
            suggestion_count: search.suggestion_count,
        }
    }

    /// Create a client from the full settings, applying the proxy if any
    pub fn with_settings(settings: &Settings) -> Self {
        let mut client = Self::from_search_settings(&settings.search);
        if let Some(url) = settings.network.proxy_url() {
            if let Err(e) = client.set_proxy(&url) {
                tracing::warn!("Failed to set proxy: {}", e);
            } else {
                info!("Using proxy for Books API requests");
            }
        }
        client
    }

    pub fn set_proxy(&mut self, proxy: &str) -> Result<()> {
        self.api.set_proxy(proxy)
    }

    /// Full search for the results grid
    pub async fn search(&self, query: &str) -> Result<Vec<Volume>> {
        let volumes = self.api.search_volumes(query, self.max_results).await?;
        info!("Search '{}' returned {} volumes", query, volumes.len());
        Ok(volumes)
    }

    /// Small lookup used for type-ahead suggestions
    pub async fn suggest(&self, query: &str) -> Result<Vec<Volume>> {
        let volumes = self
            .api
            .search_volumes(query, self.suggestion_count)
            .await?;
        debug!("Suggest '{}' returned {} volumes", query, volumes.len());
        Ok(volumes)
    }

    /// Fetch cover image bytes
    pub async fn cover(&self, url: &str) -> Result<Vec<u8>> {
        self.api.download_bytes(url).await
    }
}

impl Default for BooksClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response, returning the endpoint URL and a
    /// handle resolving to the raw request head.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{}/books/v1/volumes", addr), handle)
    }

    fn client_for(endpoint: String) -> BooksClient {
        BooksClient::from_search_settings(&SearchSettings {
            endpoint,
            ..SearchSettings::default()
        })
    }

    #[tokio::test]
    async fn test_search_sends_query_and_parses_items() {
        let body = r#"{"items":[{"id":"v1","volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#;
        let (endpoint, server) = serve_once("200 OK", body.to_string()).await;

        let volumes = client_for(endpoint).search("dune herbert").await.unwrap();
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].title.as_deref(), Some("Dune"));

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /books/v1/volumes?q=dune%20herbert&maxResults=24 "),
            "unexpected request line: {}",
            request.lines().next().unwrap_or_default()
        );
    }

    #[tokio::test]
    async fn test_suggest_uses_suggestion_page_size() {
        let (endpoint, server) = serve_once("200 OK", "{}".to_string()).await;

        let volumes = client_for(endpoint).suggest("du").await.unwrap();
        assert!(volumes.is_empty());

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /books/v1/volumes?q=du&maxResults=6 "));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let body = r#"{"error":{"code":503,"message":"Backend Error"}}"#;
        let (endpoint, server) = serve_once("503 Service Unavailable", body.to_string()).await;

        let result = client_for(endpoint).search("anything").await;
        assert!(result.is_err());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_is_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(format!("http://{}/volumes", addr))
            .search("anything")
            .await;
        assert!(result.is_err());
    }
}
