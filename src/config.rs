//! Run configuration
//!
//! With no arguments a run reads `technical_terms.txt` and writes
//! `technical_dictionary_with_articles.json`, both beside the executable, and
//! translates Russian to Kyrgyz. Every piece can be overridden on the command
//! line; the API key can also come from `GOOGLE_TRANSLATE_API_KEY`.

use crate::builder::RunPaths;
use crate::error::{Error, Result};
use crate::mt::google_translate::API_KEY_ENV;
use crate::mt::{GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator};
use crate::terms::BlankLines;
use crate::wiki::mediawiki::DEFAULT_ENDPOINT;
use crate::wiki::{ArticleSource, MockArticleSource, WikipediaClient};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_TERMS_FILE: &str = "technical_terms.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "technical_dictionary_with_articles.json";
pub const DEFAULT_SOURCE_LOCALE: &str = "ru";
pub const DEFAULT_TARGET_LOCALE: &str = "ky";

const MOCK_ARTICLE: &str = "Бул макала сыноо үчүн түзүлгөн.";

/// Translation service credential
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub paths: RunPaths,
    pub source_locale: String,
    pub target_locale: String,
    pub api_key: Option<ApiKey>,
    pub wiki_endpoint: String,
    pub mock: bool,
}

/// The command-line interface
pub fn command() -> Command {
    Command::new("termdict")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate a technical term list and attach Wikipedia extracts")
        .arg(
            Arg::new("terms")
                .long("terms")
                .short('t')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Term list, one per line (default: technical_terms.txt beside the binary)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Output JSON (default: technical_dictionary_with_articles.json beside the binary)"),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .default_value(DEFAULT_SOURCE_LOCALE)
                .help("Source language code"),
        )
        .arg(
            Arg::new("target-locale")
                .long("target")
                .default_value(DEFAULT_TARGET_LOCALE)
                .help("Target language code, also selects the Wikipedia edition"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .env(API_KEY_ENV)
                .hide_env_values(true)
                .help("Google Translate API key"),
        )
        .arg(
            Arg::new("wiki-endpoint")
                .long("wiki-endpoint")
                .default_value(DEFAULT_ENDPOINT)
                .help("MediaWiki API endpoint; {lang} is replaced by the target language"),
        )
        .arg(
            Arg::new("skip-blank-lines")
                .long("skip-blank-lines")
                .action(ArgAction::SetTrue)
                .help("Ignore empty lines in the term list instead of sending them"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .action(ArgAction::SetTrue)
                .help("Use offline mock services instead of Google Translate and Wikipedia"),
        )
}

/// Directory holding the running executable, or `.` if it cannot be determined
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl RunConfig {
    /// Parse arguments, resolving default file names against `base_dir`
    pub fn from_args<I, T>(args: I, base_dir: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command()
            .try_get_matches_from(args)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        Ok(Self::from_matches(&matches, base_dir))
    }

    pub fn from_matches(matches: &ArgMatches, base_dir: &Path) -> Self {
        let path_or_default = |id: &str, default: &str| {
            matches
                .get_one::<PathBuf>(id)
                .cloned()
                .unwrap_or_else(|| base_dir.join(default))
        };
        let string_arg = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();

        let blank_lines = if matches.get_flag("skip-blank-lines") {
            BlankLines::Skip
        } else {
            BlankLines::Preserve
        };

        RunConfig {
            paths: RunPaths {
                terms: path_or_default("terms", DEFAULT_TERMS_FILE),
                output: path_or_default("output", DEFAULT_OUTPUT_FILE),
                blank_lines,
            },
            source_locale: string_arg("source-locale"),
            target_locale: string_arg("target-locale"),
            api_key: matches
                .get_one::<String>("api-key")
                .filter(|k| !k.trim().is_empty())
                .map(ApiKey::new),
            wiki_endpoint: string_arg("wiki-endpoint"),
            mock: matches.get_flag("mock"),
        }
    }

    /// Construct the translation client
    ///
    /// # Errors
    ///
    /// `Error::ConfigError` without an API key (unless mocking), or any
    /// provider construction error. Either one ends the run.
    pub fn translator(&self) -> Result<Box<dyn MachineTranslator>> {
        if self.mock {
            return Ok(Box::new(MockTranslator::new(MockMode::Suffix)));
        }

        let key = self.api_key.as_ref().ok_or_else(|| {
            Error::ConfigError(format!(
                "No API key given; pass --api-key or set {}",
                API_KEY_ENV
            ))
        })?;
        Ok(Box::new(GoogleTranslateProvider::new(key.expose().to_string())?))
    }

    /// Construct the article source
    pub fn article_source(&self) -> Result<Box<dyn ArticleSource>> {
        if self.mock {
            return Ok(Box::new(MockArticleSource::new().with_fallback(MOCK_ARTICLE)));
        }
        Ok(Box::new(
            WikipediaClient::new()?.with_endpoint(self.wiki_endpoint.clone()),
        ))
    }
}
