//! Wikipedia article source
//!
//! Uses the MediaWiki Action API of the requested language edition in two
//! steps: a full-text search for the term, then a plain-text extract of the
//! top-ranked hit. The extract is passed through [`clean_article`].

use crate::clean::clean_article;
use crate::error::{Error, Result};
use crate::mt::translator::normalize_locale;
use crate::wiki::source::ArticleSource;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Endpoint template; `{lang}` is replaced by the language subtag
pub const DEFAULT_ENDPOINT: &str = "https://{lang}.wikipedia.org/w/api.php";

const USER_AGENT: &str = concat!(
    "termdict/",
    env!("CARGO_PKG_VERSION"),
    " (technical glossary builder)"
);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    pageid: u64,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: ExtractQuery,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    extract: Option<String>,
}

impl SearchResponse {
    /// Page id of the highest-ranked hit, if any
    fn top_page_id(&self) -> Option<u64> {
        self.query
            .as_ref()
            .and_then(|q| q.search.first())
            .map(|hit| hit.pageid)
    }
}

impl ExtractResponse {
    fn into_extract(mut self, page_id: u64) -> Result<String> {
        let page = self.query.pages.remove(&page_id.to_string()).ok_or_else(|| {
            Error::ArticleError(format!("Page {} missing from extract response", page_id))
        })?;
        page.extract
            .ok_or_else(|| Error::ArticleError(format!("Page {} has no extract", page_id)))
    }
}

/// MediaWiki search + extracts client
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Use a different endpoint template (may contain `{lang}`)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn api_url(&self, language: &str) -> Result<String> {
        Ok(self.endpoint.replace("{lang}", &normalize_locale(language)?))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::NetworkError(format!(
                "Wikipedia API returned {}",
                status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::ArticleError(format!("Failed to parse API response: {}", e)))
    }

    /// Search for `term` and return the top hit's page id
    pub async fn search(&self, term: &str, language: &str) -> Result<Option<u64>> {
        let url = self.api_url(language)?;
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", term),
            ("utf8", ""),
            ("format", "json"),
        ];
        let response: SearchResponse = self.get_json(&url, &params).await?;
        Ok(response.top_page_id())
    }

    /// Plain-text extract of one page, uncleaned
    pub async fn extract(&self, page_id: u64, language: &str) -> Result<String> {
        let url = self.api_url(language)?;
        let page_ids = page_id.to_string();
        let params = [
            ("action", "query"),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("pageids", page_ids.as_str()),
            ("format", "json"),
        ];
        let response: ExtractResponse = self.get_json(&url, &params).await?;
        response.into_extract(page_id)
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    async fn fetch_article(&self, term: &str, language: &str) -> Result<String> {
        let page_id = self
            .search(term, language)
            .await?
            .ok_or_else(|| Error::ArticleNotFound(term.to_string()))?;
        debug!("Top hit for '{}' is page {}", term, page_id);

        let raw = self.extract(page_id, language).await?;
        Ok(clean_article(&raw))
    }

    fn source_name(&self) -> &str {
        "Wikipedia"
    }
}
