//! Glossary data model and JSON writer
//!
//! Lookups are tagged internally ([`Lookup`]) and only turn into the legacy
//! placeholder strings when the dictionary is serialized, so a real article
//! that happens to read "Перевод не найден" is never mistaken for a failure.
//!
//! Output shape:
//!
//! ```json
//! {
//!     "компьютер": {
//!         "translation": "компьютер",
//!         "article": "Компьютер — ..."
//!     }
//! }
//! ```

use crate::error::{Error, Result};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Written in place of a translation that could not be obtained
pub const TRANSLATION_NOT_FOUND: &str = "Перевод не найден";

/// Written in place of an article that could not be obtained
pub const ARTICLE_NOT_FOUND: &str = "Не удалось найти статью на данную тему";

/// Outcome of one remote lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(String),
    Failed(Error),
    /// Not attempted because an earlier step already failed
    Skipped,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn as_found(&self) -> Option<&str> {
        match self {
            Lookup::Found(text) => Some(text),
            _ => None,
        }
    }

    fn or_placeholder<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.as_found().unwrap_or(placeholder)
    }
}

impl From<Result<String>> for Lookup {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Lookup::Found(text),
            Err(e) => Lookup::Failed(e),
        }
    }
}

/// Translation and article for one source term
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub translation: Lookup,
    pub article: Lookup,
}

impl DictionaryEntry {
    pub fn new(translation: Lookup, article: Lookup) -> Self {
        Self {
            translation,
            article,
        }
    }

    /// Entry for a term whose translation failed; the article is never fetched
    pub fn untranslated(reason: Lookup) -> Self {
        Self::new(reason, Lookup::Skipped)
    }
}

impl Serialize for DictionaryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DictionaryEntry", 2)?;
        state.serialize_field(
            "translation",
            self.translation.or_placeholder(TRANSLATION_NOT_FOUND),
        )?;
        state.serialize_field("article", self.article.or_placeholder(ARTICLE_NOT_FOUND))?;
        state.end()
    }
}

/// Source term → entry, in first-seen order
///
/// Inserting a term that is already present replaces its entry but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, DictionaryEntry)>,
    /// Term → index into `entries`
    positions: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: String, entry: DictionaryEntry) {
        match self.positions.get(&term) {
            Some(&index) => self.entries[index].1 = entry,
            None => {
                self.positions.insert(term.clone(), self.entries.len());
                self.entries.push((term, entry));
            }
        }
    }

    pub fn get(&self, term: &str) -> Option<&DictionaryEntry> {
        self.positions
            .get(term)
            .map(|&index| &self.entries[index].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryEntry)> {
        self.entries.iter().map(|(t, e)| (t.as_str(), e))
    }

    /// Pretty JSON, four-space indent, non-ASCII kept literal
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::SerializationError(e.to_string()))
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, entry) in &self.entries {
            map.serialize_entry(term, entry)?;
        }
        map.end()
    }
}

/// Write the dictionary as UTF-8 JSON, replacing any existing file
///
/// # Errors
///
/// `Error::IoError` if the file cannot be written.
pub fn save_dictionary(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let json = dictionary.to_json_string()?;
    fs::write(path, json).map_err(|e| {
        Error::IoError(format!(
            "Failed to write dictionary to '{}': {}",
            path.display(),
            e
        ))
    })?;
    info!(
        "Saved {} entries to '{}'",
        dictionary.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn found(text: &str) -> Lookup {
        Lookup::Found(text.to_string())
    }

    #[test]
    fn test_failed_lookups_serialize_as_placeholders() {
        let entry = DictionaryEntry::untranslated(Lookup::Failed(Error::TranslationError(
            "quota".to_string(),
        )));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({"translation": TRANSLATION_NOT_FOUND, "article": ARTICLE_NOT_FOUND})
        );
    }

    #[test]
    fn test_content_equal_to_placeholder_stays_found() {
        let entry = DictionaryEntry::new(found(TRANSLATION_NOT_FOUND), found("text"));
        assert!(entry.translation.is_found());
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut dict = Dictionary::new();
        dict.insert("b".to_string(), DictionaryEntry::new(found("1"), Lookup::Skipped));
        dict.insert("a".to_string(), DictionaryEntry::new(found("2"), Lookup::Skipped));
        dict.insert("b".to_string(), DictionaryEntry::new(found("3"), Lookup::Skipped));

        let terms: Vec<&str> = dict.iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["b", "a"]);
        assert_eq!(dict.get("b").unwrap().translation, found("3"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_get_tracks_replacements() {
        let mut dict = Dictionary::new();
        for i in 0..3000 {
            let term = format!("t{}", i % 500);
            dict.insert(term, DictionaryEntry::new(found(&i.to_string()), Lookup::Skipped));
        }

        assert_eq!(dict.len(), 500);
        assert_eq!(dict.iter().next().unwrap().0, "t0");
        assert_eq!(dict.get("t7").unwrap().translation, found("2507"));
        assert!(dict.get("t500").is_none());
    }

    #[test]
    fn test_json_format() {
        let mut dict = Dictionary::new();
        dict.insert(
            "сеть".to_string(),
            DictionaryEntry::new(found("тармак"), found("Тармак — байланыш.")),
        );

        let expected = "{\n    \"сеть\": {\n        \"translation\": \"тармак\",\n        \"article\": \"Тармак — байланыш.\"\n    }\n}";
        assert_eq!(dict.to_json_string().unwrap(), expected);
    }

    #[test]
    fn test_empty_dictionary_json() {
        assert_eq!(Dictionary::new().to_json_string().unwrap(), "{}");
    }

    #[test]
    fn test_json_preserves_insertion_order() {
        let mut dict = Dictionary::new();
        for term in ["я", "а", "м"] {
            dict.insert(term.to_string(), DictionaryEntry::new(found(term), found(term)));
        }
        let json = dict.to_json_string().unwrap();
        let positions: Vec<usize> = ["\"я\"", "\"а\"", "\"м\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_save_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");

        let mut dict = Dictionary::new();
        dict.insert(
            "компьютер".to_string(),
            DictionaryEntry::new(found("компьютер"), found("Эсептөөчү машина.")),
        );
        dict.insert(
            "dog".to_string(),
            DictionaryEntry::untranslated(Lookup::Failed(Error::TranslationError("x".into()))),
        );

        save_dictionary(&dict, &path).unwrap();
        let first = fs::read(&path).unwrap();
        save_dictionary(&dict, &path).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);

        let value: Value = serde_json::from_slice(&second).unwrap();
        assert_eq!(value["dog"]["article"], ARTICLE_NOT_FOUND);
        assert!(String::from_utf8(second).unwrap().contains("Эсептөөчү"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dictionary.json");
        let result = save_dictionary(&Dictionary::new(), &path);
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
