// src/deck/loader.rs
// Reads the raw deck records at startup and runs them through the validator.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use super::validator::{validate_collection, ValidationReport};

/// The deck compiled into the binary, used when no path is given.
const BUNDLED_DECK: &str = include_str!("../../decks/default.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read deck {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("deck {origin} is not valid JSON: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the raw records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::Bundled => f.write_str("<bundled deck>"),
            DeckSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parses deck text into untyped records. Shape checks happen later, in the validator.
pub fn parse_records(text: &str, origin: &DeckSource) -> Result<Value, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

pub fn read_records(source: &DeckSource) -> Result<Value, LoadError> {
    match source {
        DeckSource::Bundled => parse_records(BUNDLED_DECK, source),
        DeckSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            parse_records(&text, source)
        }
    }
}

/// Loads and validates a deck. Malformed records are dropped, not treated as errors;
/// only an unreadable or unparseable source fails.
pub fn load_deck(source: &DeckSource) -> Result<ValidationReport, LoadError> {
    log::info!("Attempting to load deck from: {}", source);
    let raw = read_records(source)?;
    let report = validate_collection(&raw);
    log::info!(
        "Loaded {} cards, rejected {} records.",
        report.cards.len(),
        report.rejected_count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_deck(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bundled_deck_is_clean() {
        let report = load_deck(&DeckSource::Bundled).unwrap();
        assert!(!report.cards.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_deck(
            r#"[
                {"id": 1, "category": "A", "prompt": "Q1", "response": "R1"},
                {"id": 2, "category": "B", "prompt": "", "response": "R2"},
                {"id": 3, "type": "B", "question": "Q3", "answer": "R3"}
            ]"#,
        );
        let report = load_deck(&DeckSource::File(file.path().to_path_buf())).unwrap();
        let ids: Vec<u64> = report.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(report.rejected_count(), 1);
    }

    #[test]
    fn test_empty_deck_file_is_not_an_error() {
        let file = write_deck("[]");
        let report = load_deck(&DeckSource::File(file.path().to_path_buf())).unwrap();
        assert!(report.cards.is_empty());
        assert!(report.was_collection());
    }

    #[test]
    fn test_non_collection_file_loads_as_empty() {
        let file = write_deck(r#"{"cards": []}"#);
        let report = load_deck(&DeckSource::File(file.path().to_path_buf())).unwrap();
        assert!(report.cards.is_empty());
        assert!(!report.was_collection());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_deck(&DeckSource::File(path)).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_deck("[{\"id\": 1,");
        let err = load_deck(&DeckSource::File(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }
}
