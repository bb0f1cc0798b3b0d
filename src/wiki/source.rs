//! Article source trait
//!
//! An `ArticleSource` turns a (translated) term into reference text in the
//! same language. Implementations own any normalization; callers store what
//! they get back verbatim.

use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch article text for `term` from the `language` edition
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Cleaned article text
    /// * `Err(Error::ArticleNotFound)` - The search had no hits
    /// * `Err(Error)` - Any network or response-shape failure
    async fn fetch_article(&self, term: &str, language: &str) -> Result<String>;

    /// Name of this source, for logging
    fn source_name(&self) -> &str;
}
