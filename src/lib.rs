//! Bilingual technical glossary builder
//!
//! Reads a list of source-language terms, machine-translates each one,
//! attaches a cleaned Wikipedia extract for the translation and writes the
//! result as a JSON dictionary keyed by the original term.
//!
//! # Example
//!
//! ```ignore
//! use termdict::builder::DictionaryBuilder;
//! use termdict::mt::GoogleTranslateProvider;
//! use termdict::wiki::WikipediaClient;
//!
//! #[tokio::main]
//! async fn main() -> termdict::Result<()> {
//!     let translator = GoogleTranslateProvider::new("api-key".to_string())?;
//!     let articles = WikipediaClient::new()?;
//!     let builder = DictionaryBuilder::new(&translator, &articles, "ru", "ky");
//!
//!     let dictionary = builder.build(&["компьютер".to_string()]).await;
//!     println!("{}", dictionary.to_json_string()?);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod clean;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod mt;
pub mod numerals;
pub mod terms;
pub mod wiki;

pub use builder::{BuildSummary, DictionaryBuilder, RunOutcome, RunPaths};
pub use dictionary::{Dictionary, DictionaryEntry, Lookup};
pub use error::{Error, Result};
