/// Encyclopedia lookup
///
/// [`ArticleSource`] abstracts "give me reference text for this term";
/// [`WikipediaClient`] implements it against the MediaWiki Action API and
/// [`MockArticleSource`] serves canned text offline.
pub mod mediawiki;
pub mod mock;
pub mod source;

pub use mediawiki::WikipediaClient;
pub use mock::MockArticleSource;
pub use source::ArticleSource;
