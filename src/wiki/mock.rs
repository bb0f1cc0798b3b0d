//! Offline article source for tests and dry runs

use crate::error::{Error, Result};
use crate::wiki::source::ArticleSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves articles from a fixed table and counts every lookup
///
/// Terms missing from the table fail with `Error::ArticleNotFound`, unless a
/// fallback text is set.
#[derive(Debug, Default)]
pub struct MockArticleSource {
    articles: HashMap<String, String>,
    fallback: Option<String>,
    calls: AtomicUsize,
}

impl MockArticleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, term: impl Into<String>, text: impl Into<String>) -> Self {
        self.articles.insert(term.into(), text.into());
        self
    }

    /// Answer every unknown term with `text`
    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(text.into());
        self
    }

    /// Number of `fetch_article` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn fetch_article(&self, term: &str, _language: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.articles
            .get(term)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| Error::ArticleNotFound(term.to_string()))
    }

    fn source_name(&self) -> &str {
        "Mock Articles"
    }
}
