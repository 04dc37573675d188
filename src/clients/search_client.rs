//! Local-search (Naver) API client module
//!
//! Queries places for "{location} {purpose}" and renders them as plain text blocks.

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, warn};

use super::traits::LocalSearch;
use crate::core::config::AppConfig;
use crate::core::models::{SearchResponse, SearchResultItem, SummaryFields};

/// Characters left unescaped in the query: alphanumerics plus `_ . - ~ /`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

pub const SEARCH_DISPLAY: u32 = 10;
pub const SEARCH_START: u32 = 1;
pub const SEARCH_SORT: &str = "random";

pub struct SearchClient {
    http: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
}

impl SearchClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            client_id: config.naver_client_id.clone(),
            client_secret: config.naver_client_secret.clone(),
            base_url: config.naver_base_url.clone(),
        }
    }

    #[must_use]
    pub fn search_url(&self, fields: &SummaryFields) -> String {
        build_search_url(&self.base_url, fields)
    }
}

/// Percent-encoded `"{location} {purpose}"`.
#[must_use]
pub fn encode_query(fields: &SummaryFields) -> String {
    let keyword = format!("{} {}", fields.location, fields.purpose);
    utf8_percent_encode(&keyword, QUERY_ENCODE_SET).to_string()
}

#[must_use]
pub fn build_search_url(base_url: &str, fields: &SummaryFields) -> String {
    format!(
        "{}/v1/search/local.json?query={}&display={}&start={}&sort={}",
        base_url,
        encode_query(fields),
        SEARCH_DISPLAY,
        SEARCH_START,
        SEARCH_SORT
    )
}

/// Three labeled lines per item, blank line between items, no trailing whitespace.
#[must_use]
pub fn format_search_results(items: &[SearchResultItem]) -> String {
    let mut result = String::new();
    for item in items {
        result.push_str(&format!("제목: {}\n", item.title));
        result.push_str(&format!("링크: {}\n", item.link));
        result.push_str(&format!("주소: {}\n", item.address));
        result.push('\n');
    }
    result.trim().to_string()
}

#[must_use]
pub fn search_failure_text(detail: impl std::fmt::Display) -> String {
    format!("API 요청 실패: {detail}")
}

#[async_trait]
impl LocalSearch for SearchClient {
    async fn search(&self, fields: &SummaryFields) -> String {
        let url = self.search_url(fields);
        info!(location = %fields.location, purpose = %fields.purpose, "Searching local places");

        let response = match self
            .http
            .get(&url)
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Local search request failed: {}", e);
                return search_failure_text(e);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Local search rejected");
            return search_failure_text(status.as_u16());
        }

        match response.json::<SearchResponse>().await {
            Ok(body) => {
                info!(count = body.items.len(), "Local search returned items");
                format_search_results(&body.items)
            }
            Err(e) => {
                warn!("Failed to parse local search response: {}", e);
                search_failure_text(e)
            }
        }
    }
}
