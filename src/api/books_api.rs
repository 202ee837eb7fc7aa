//! Google Books API - HTTP layer
//!
//! Builds `volumes` query URLs, performs the GET requests and hands bodies to
//! the model parsers.

pub mod model;

use anyhow::{Result, anyhow, bail};
use reqwest::{Client, header};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

pub use model::*;

/// Public search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Largest page the API accepts for `maxResults`
pub const MAX_PAGE_SIZE: u32 = 40;

const TIMEOUT: u64 = 20;

const USER_AGENT: &str = concat!("bookfinder/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct BooksApi {
    client: Client,
    endpoint: String,
}

impl fmt::Debug for BooksApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooksApi")
            .field("client", &"<HttpClient>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Default for BooksApi {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

fn build_client(proxy: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(TIMEOUT))
        .user_agent(USER_AGENT);
    if let Some(proxy) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    builder
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))
}

impl BooksApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = build_client(None).unwrap_or_else(|e| {
            warn!("{}, using default client", e);
            Client::new()
        });
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn set_proxy(&mut self, proxy: &str) -> Result<()> {
        self.client = build_client(Some(proxy))?;
        Ok(())
    }

    /// Full request URL for a free-text query
    pub fn volumes_url(&self, query: &str, max_results: u32) -> String {
        format!(
            "{}?q={}&maxResults={}",
            self.endpoint,
            urlencoding::encode(query),
            max_results.clamp(1, MAX_PAGE_SIZE)
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Unexpected HTTP status {}", status);
        }
        Ok(response)
    }

    /// Search volumes matching `query`, at most `max_results` items
    pub async fn search_volumes(&self, query: &str, max_results: u32) -> Result<Vec<Volume>> {
        let url = self.volumes_url(query, max_results);
        debug!("GET {}", url);

        let body = self
            .get(&url)
            .await?
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response: {}", e))?;
        to_volumes(&body)
    }

    /// Download a binary resource such as a cover thumbnail
    pub async fn download_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| anyhow!("Failed to read response: {}", e))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumes_url_encodes_query() {
        let api = BooksApi::default();
        assert_eq!(
            api.volumes_url("El nombre del viento", 24),
            "https://www.googleapis.com/books/v1/volumes?q=El%20nombre%20del%20viento&maxResults=24"
        );
    }

    #[test]
    fn test_volumes_url_clamps_page_size() {
        let api = BooksApi::new("http://localhost/v");
        assert!(api.volumes_url("x", 500).ends_with("maxResults=40"));
        assert!(api.volumes_url("x", 0).ends_with("maxResults=1"));
    }
}
