//! Word list loading utilities
//!
//! Loads a replacement word list from a file: one word per line, blank lines
//! and `#` comments skipped, words normalized to uppercase.

use crate::core::{Dictionary, DictionaryError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid word list {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DictionaryError,
    },
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read or holds no valid words.
///
/// # Examples
/// ```no_run
/// use honeycomb_words::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dict = parse_words(&content).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), words = dict.len(), "loaded word list");
    Ok(dict)
}

/// Parse word list text into a dictionary
///
/// # Errors
///
/// Returns a `DictionaryError` if no words remain after skipping blank and
/// comment lines, or a word contains non-letters.
///
/// # Examples
/// ```
/// use honeycomb_words::wordlists::loader::parse_words;
///
/// let dict = parse_words("# starters\nstar\n\nArts\n").unwrap();
/// assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["STAR", "ARTS"]);
/// ```
pub fn parse_words(content: &str) -> Result<Dictionary, DictionaryError> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_uppercase);

    Dictionary::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_normalizes_case() {
        let dict = parse_words("star\nLeap\nPLEA").unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["STAR", "LEAP", "PLEA"]);
    }

    #[test]
    fn parse_words_skips_blank_and_comments() {
        let dict = parse_words("# header\n\n  star  \n# more\n\ntale\n").unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("STAR"));
        assert!(dict.contains("TALE"));
    }

    #[test]
    fn parse_words_empty() {
        assert_eq!(parse_words(""), Err(DictionaryError::Empty));
        assert_eq!(parse_words("# only comments\n\n"), Err(DictionaryError::Empty));
    }

    #[test]
    fn parse_words_rejects_non_letters() {
        assert_eq!(
            parse_words("star\nst4r\n"),
            Err(DictionaryError::InvalidWord("ST4R".to_string()))
        );
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("definitely/not/a/real/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "honeycomb_words_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "star\narts\n").unwrap();

        let dict = load_from_file(&path).unwrap();
        assert_eq!(dict.len(), 2);

        fs::remove_file(&path).unwrap();
    }
}
