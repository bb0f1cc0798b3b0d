//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the dictionary builder can run against Google Translate or a mock
//! without knowing which one it has.
//!
//! # Example
//!
//! ```ignore
//! use termdict::mt::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::new("api-key".to_string())?;
//!
//!     let result = provider.translate("компьютер", "ru", "ky").await?;
//!     println!("{}", result);
//!
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use async_trait::async_trait;
use icu_locale::Locale;

/// Generic trait for machine translation providers
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target language
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "ru", "ru-RU")
    /// * `target_locale` - Target language code (e.g., "ky")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(Error)` - If translation fails
    async fn translate(&self, text: &str, source_locale: &str, target_locale: &str)
    -> Result<String>;

    /// Name of this provider, for logging
    fn provider_name(&self) -> &str;
}

/// Reduce a language tag to its lowercase language subtag
///
/// - `ru-RU` → `ru`
/// - `ky` → `ky`
/// - `sr_Latn` → `sr`
///
/// # Errors
///
/// Returns `Error::InvalidLocale` when the tag is empty or not well-formed BCP 47.
pub fn normalize_locale(locale: &str) -> Result<String> {
    Ok(parse_locale(locale)?.id.language.as_str().to_string())
}

fn parse_locale(locale: &str) -> Result<Locale> {
    if locale.trim().is_empty() {
        return Err(Error::InvalidLocale("Locale code is empty".to_string()));
    }

    locale
        .replace('_', "-")
        .parse::<Locale>()
        .map_err(|e| Error::InvalidLocale(format!("Invalid locale code '{}': {:?}", locale, e)))
}
