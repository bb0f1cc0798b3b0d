//! Loading the source term list
//!
//! The input is a UTF-8 text file with one term per line. Each line is trimmed;
//! what happens to lines that end up empty is decided by [`BlankLines`].

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

/// What to do with lines that are empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Keep them as empty-string terms, in position
    #[default]
    Preserve,
    /// Drop them
    Skip,
}

/// Parse term-list text into trimmed lines.
pub fn parse_terms(content: &str, blank_lines: BlankLines) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| blank_lines == BlankLines::Preserve || !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load terms from a file, failing on any I/O error
///
/// # Errors
/// - File not found
/// - File not readable or not valid UTF-8
pub fn load_terms(path: &Path, blank_lines: BlankLines) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!("Failed to read file '{}': {}", path.display(), e))
    })?;
    Ok(parse_terms(&content, blank_lines))
}

/// Load terms from a file, degrading to an empty list on failure
///
/// The failure is logged; the caller treats an empty list as "nothing to do".
pub fn read_terms(path: &Path, blank_lines: BlankLines) -> Vec<String> {
    if !path.exists() {
        error!("Term file {} not found", path.display());
        return Vec::new();
    }

    match load_terms(path, blank_lines) {
        Ok(terms) => {
            debug!("Read {} terms from {}", terms.len(), path.display());
            if terms.iter().any(String::is_empty) {
                warn!("Term file {} contains blank lines", path.display());
            }
            terms
        }
        Err(e) => {
            error!("Error reading term file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
