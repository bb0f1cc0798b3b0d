//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2.
//!
//! # Authentication
//!
//! The provider is constructed from an explicit API key. The CLI reads it from
//! `--api-key` or `GOOGLE_TRANSLATE_API_KEY`; this module never looks at the
//! process environment itself.

use crate::error::{Error, Result};
use crate::mt::translator::{MachineTranslator, normalize_locale};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Environment variable the CLI falls back to for the API key
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per string
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Create a provider with an explicit API key
    ///
    /// # Errors
    ///
    /// `Error::ConfigError` if the key is blank, `Error::NetworkError` if the
    /// HTTP client cannot be built.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn check_length(text: &str) -> Result<()> {
        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(Error::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }
        Ok(())
    }

    /// One POST to the v2 endpoint; the reply must carry one translation per text
    async fn post_translations(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> Result<Vec<String>> {
        let body = json!({
            "q": texts,
            "source": normalize_locale(source_locale)?,
            "target": normalize_locale(target_locale)?,
            "format": "text"
        });

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                Error::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                Error::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            Error::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        let results: Vec<String> = parsed
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if results.len() != texts.len() {
            return Err(Error::TranslationError(format!(
                "API returned {} translations for {} texts",
                results.len(),
                texts.len()
            )));
        }

        Ok(results)
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String> {
        normalize_locale(source_locale)?;
        normalize_locale(target_locale)?;

        if text.trim().is_empty() {
            return Err(Error::TranslationError("Nothing to translate".to_string()));
        }
        Self::check_length(text)?;

        let results = self
            .post_translations(&[text.to_string()], source_locale, target_locale)
            .await?;

        results
            .into_iter()
            .next()
            .ok_or_else(|| Error::TranslationError("API returned no translation".to_string()))
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_key() {
        let provider = GoogleTranslateProvider::new("test-api-key".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().provider_name(), "Google Translate");
    }

    #[test]
    fn test_new_with_empty_key() {
        match GoogleTranslateProvider::new("".to_string()) {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_new_with_whitespace_key() {
        assert!(GoogleTranslateProvider::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_with_base_url() {
        let provider = GoogleTranslateProvider::new("k".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9/translate");
        assert!(format!("{:?}", provider).contains("127.0.0.1:9"));
    }

    // ========== Response Parsing Tests ==========

    #[test]
    fn test_parse_translate_response() {
        let body = r#"{"data":{"translations":[{"translatedText":"компьютер","detectedSourceLanguage":"ru"}]}}"#;
        let parsed: TranslateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.translations[0].translated_text, "компьютер");
    }

    #[test]
    fn test_parse_response_missing_field() {
        let body = r#"{"data":{"translations":[{"text":"x"}]}}"#;
        assert!(serde_json::from_str::<TranslateResponse>(body).is_err());
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_translate_blank_term_is_an_error() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        match provider.translate("", "ru", "ky").await {
            Err(Error::TranslationError(msg)) => assert!(msg.contains("Nothing")),
            other => panic!("Expected TranslationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_invalid_source_locale() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        let result = provider.translate("сеть", "invalid@code", "ky").await;
        assert!(matches!(result, Err(Error::InvalidLocale(_))));
    }

    #[tokio::test]
    async fn test_translate_text_too_long() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        let long_text = "x".repeat(GoogleTranslateProvider::MAX_CHARS_PER_STRING + 1);
        match provider.translate(&long_text, "ru", "ky").await {
            Err(Error::TranslationError(msg)) => assert!(msg.contains("exceeds maximum")),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let provider = GoogleTranslateProvider::new("test-key".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9/translate");
        assert!(provider.translate("сеть", "ru", "ky").await.is_err());
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_output_masks_key() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("test-key"));
    }

    // ========== Integration Tests (require real API key) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_real_api_single_translation() {
        let Ok(api_key) = std::env::var(API_KEY_ENV) else {
            eprintln!("Skipping: {} not set", API_KEY_ENV);
            return;
        };

        let provider = GoogleTranslateProvider::new(api_key).unwrap();
        let result = provider.translate("компьютер", "ru", "ky").await.unwrap();
        println!("Translation: компьютер → {}", result);
        assert!(!result.is_empty());
    }
}
