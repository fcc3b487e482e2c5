//! Open Library search API client.
//!
//! `GET {api_url}?q=..&page=..&limit=..&fields=..` with a blocking `reqwest`
//! client. The body is decoded into a [`Page`] at this boundary.

use super::fetcher::PageFetcher;
use crate::model::{NetworkError, Page, PageNumber, SearchResponse};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Public search endpoint.
pub const DEFAULT_API_URL: &str = "https://openlibrary.org/search.json";

/// Books requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("shelfview/", env!("CARGO_PKG_VERSION"));

/// Fields requested from the search index.
pub const SEARCH_FIELDS: &str = "title,author_name,first_publish_year,cover_i,subject,key";

/// HTTP settings for [`OpenLibraryFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Search endpoint URL.
    pub api_url: String,
    /// Books per page (`limit`).
    pub page_size: u32,
    /// `User-Agent` header.
    pub user_agent: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Query string pairs for one page request.
pub fn search_params(query: &str, page: PageNumber, page_size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_string()),
        ("page", page.to_string()),
        ("limit", page_size.to_string()),
        ("fields", SEARCH_FIELDS.to_string()),
    ]
}

/// Decode a search response body into page `page`.
///
/// # Errors
///
/// Returns `NetworkError` if the body is not a search response.
pub fn decode_page(page: PageNumber, body: &str) -> Result<Page, NetworkError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| NetworkError::new(format!("invalid search response: {e}")))?;
    Ok(Page::from_response(page, response))
}

/// [`PageFetcher`] backed by the Open Library search endpoint.
#[derive(Debug, Clone)]
pub struct OpenLibraryFetcher {
    client: Client,
    config: FetcherConfig,
}

impl OpenLibraryFetcher {
    /// Build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Settings in use.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }
}

impl PageFetcher for OpenLibraryFetcher {
    fn fetch(&self, query: &str, page: PageNumber) -> Result<Page, NetworkError> {
        debug!(query, %page, "GET {}", self.config.api_url);
        let body = self
            .client
            .get(&self.config.api_url)
            .query(&search_params(query, page, self.config.page_size))
            .send()?
            .error_for_status()?
            .text()?;
        decode_page(page, &body)
    }
}
