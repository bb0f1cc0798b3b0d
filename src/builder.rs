//! Glossary pipeline
//!
//! Terms are processed one at a time, in input order:
//!
//! 1. every term is translated; a failure is recorded for that term only
//! 2. every successful translation gets an article lookup; failed
//!    translations skip the lookup entirely
//! 3. the assembled [`Dictionary`] is written out
//!
//! Only an empty term list stops [`run`] early, and that is not an error.

use crate::dictionary::{Dictionary, DictionaryEntry, Lookup, save_dictionary};
use crate::mt::MachineTranslator;
use crate::terms::{BlankLines, read_terms};
use crate::wiki::ArticleSource;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Counts over a finished dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub terms: usize,
    pub translated: usize,
    pub translation_failed: usize,
    pub articles_found: usize,
    pub articles_missing: usize,
}

impl BuildSummary {
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let mut summary = BuildSummary {
            terms: dictionary.len(),
            ..Default::default()
        };
        for (_, entry) in dictionary.iter() {
            if entry.translation.is_found() {
                summary.translated += 1;
            } else {
                summary.translation_failed += 1;
            }
            if entry.article.is_found() {
                summary.articles_found += 1;
            } else {
                summary.articles_missing += 1;
            }
        }
        summary
    }
}

/// Drives translation and article lookup for a batch of terms
pub struct DictionaryBuilder<'a> {
    translator: &'a dyn MachineTranslator,
    articles: &'a dyn ArticleSource,
    source_locale: String,
    target_locale: String,
}

impl<'a> DictionaryBuilder<'a> {
    pub fn new(
        translator: &'a dyn MachineTranslator,
        articles: &'a dyn ArticleSource,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            articles,
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
        }
    }

    /// Translate each term, keeping input order
    ///
    /// A repeated term is translated again and takes the later result, at the
    /// position of its first occurrence.
    pub async fn translate_terms(&self, terms: &[String]) -> Vec<(String, Lookup)> {
        let mut translations: Vec<(String, Lookup)> = Vec::with_capacity(terms.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(terms.len());

        for term in terms {
            let lookup = match self
                .translator
                .translate(term, &self.source_locale, &self.target_locale)
                .await
            {
                Ok(text) => Lookup::Found(text),
                Err(e) => {
                    warn!("Failed to translate term '{}': {}", term, e);
                    Lookup::Failed(e)
                }
            };

            match positions.get(term.as_str()) {
                Some(&index) => translations[index].1 = lookup,
                None => {
                    positions.insert(term.as_str(), translations.len());
                    translations.push((term.clone(), lookup));
                }
            }
        }

        translations
    }

    /// Look up an article for one translated term
    pub async fn fetch_article(&self, translation: &str) -> Lookup {
        match self
            .articles
            .fetch_article(translation, &self.target_locale)
            .await
        {
            Ok(text) => Lookup::Found(text),
            Err(e) => {
                warn!("Failed to fetch article for '{}': {}", translation, e);
                Lookup::Failed(e)
            }
        }
    }

    /// Pair every translation with an article
    pub async fn attach_articles(&self, translations: Vec<(String, Lookup)>) -> Dictionary {
        let mut dictionary = Dictionary::new();

        for (term, translation) in translations {
            let entry = match translation {
                Lookup::Found(text) => {
                    let article = self.fetch_article(&text).await;
                    DictionaryEntry::new(Lookup::Found(text), article)
                }
                failed => DictionaryEntry::untranslated(failed),
            };
            dictionary.insert(term, entry);
        }

        dictionary
    }

    /// Translate and look up every term
    pub async fn build(&self, terms: &[String]) -> Dictionary {
        info!(
            "Translating {} terms {} → {} with {}",
            terms.len(),
            self.source_locale,
            self.target_locale,
            self.translator.provider_name()
        );
        let translations = self.translate_terms(terms).await;

        info!("Fetching articles from {}", self.articles.source_name());
        self.attach_articles(translations).await
    }
}

/// Where one run reads from and writes to
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub terms: PathBuf,
    pub output: PathBuf,
    pub blank_lines: BlankLines,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The term list was missing, unreadable or empty
    NothingToDo,
    Completed {
        summary: BuildSummary,
        /// False if the output file could not be written
        saved: bool,
    },
}

/// Read terms, build the dictionary and save it
pub async fn run(builder: &DictionaryBuilder<'_>, paths: &RunPaths) -> RunOutcome {
    let terms = read_terms(&paths.terms, paths.blank_lines);
    if terms.is_empty() {
        info!("No terms to translate");
        return RunOutcome::NothingToDo;
    }

    let dictionary = builder.build(&terms).await;
    let summary = BuildSummary::from_dictionary(&dictionary);
    info!(
        "Built {} entries: {} translated, {} untranslated, {} with articles",
        summary.terms, summary.translated, summary.translation_failed, summary.articles_found
    );

    let saved = match save_dictionary(&dictionary, &paths.output) {
        Ok(()) => true,
        Err(e) => {
            error!("Error saving dictionary: {}", e);
            false
        }
    };

    RunOutcome::Completed { summary, saved }
}
