/// Error types for the glossary pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing or unusable configuration (credentials, client setup)
    ConfigError(String),
    /// Language code that cannot be parsed
    InvalidLocale(String),
    /// Transport-level failure talking to a remote service
    NetworkError(String),
    /// Translation service rejected or mangled a request
    TranslationError(String),
    /// Encyclopedia search returned no page for the term
    ArticleNotFound(String),
    /// Encyclopedia response was malformed or missing fields
    ArticleError(String),
    /// Local file could not be read or written
    IoError(String),
    /// Dictionary could not be encoded
    SerializationError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            Error::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Error::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            Error::ArticleNotFound(term) => write!(f, "No article found for '{}'", term),
            Error::ArticleError(msg) => write!(f, "Article error: {}", msg),
            Error::IoError(msg) => write!(f, "I/O error: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::ArticleError(format!("Failed to decode response: {}", err))
        } else {
            Error::NetworkError(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

/// Result type for glossary operations
pub type Result<T> = std::result::Result<T, Error>;
