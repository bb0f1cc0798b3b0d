//! Mock Machine Translator for testing
//!
//! Deterministic, API-free translator for exercising the dictionary pipeline
//! without API keys or network access. Also backs the `--mock` dry-run flag.
//!
//! # Example
//!
//! ```ignore
//! use termdict::mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("сеть", "ru", "ky").await.unwrap();
//!     assert_eq!(result, "сеть_ky");
//! }
//! ```

use crate::error::{Error, Result};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "сеть" → "сеть_ky"
    Suffix,

    /// Predefined mappings; unknown text fails like an API error would
    Strict(HashMap<String, String>),

    /// Every call fails with this message
    Error(String),
}

/// Mock translator that simulates various translation scenarios
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// Build a `Strict` mock from `(source, translation)` pairs
    pub fn strict<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(MockMode::Strict(map))
    }

    /// Number of translate calls so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn apply_translation(&self, text: &str, target: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Strict(map) => map.get(text).cloned().ok_or_else(|| {
                Error::TranslationError(format!("No mock translation for '{}'", text))
            }),
            MockMode::Error(msg) => Err(Error::TranslationError(msg.clone())),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_locale: &str,
        target_locale: &str,
    ) -> Result<String> {
        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
