//! Acceptable word set
//!
//! Lookups are exact and case-sensitive; words are stored uppercase.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// The fixed set of words the game accepts
///
/// Keeps insertion order alongside the hash set so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    lookup: FxHashSet<String>,
    ordered: Vec<String>,
}

/// Error type for invalid word lists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Word list is empty")]
    Empty,
    #[error("Word '{0}' must contain only uppercase ASCII letters")]
    InvalidWord(String),
}

impl Dictionary {
    /// Build a dictionary from uppercase words
    ///
    /// Duplicate entries collapse into one.
    ///
    /// # Errors
    /// Returns `DictionaryError` if:
    /// - No words are given
    /// - A word is empty or contains anything but `A`-`Z`
    ///
    /// # Examples
    /// ```
    /// use honeycomb_words::core::Dictionary;
    ///
    /// let dict = Dictionary::new(["STAR", "ARTS", "STAR"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("STAR"));
    /// assert!(!dict.contains("star"));
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = FxHashSet::default();
        let mut ordered = Vec::new();

        for word in words {
            let word: String = word.into();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(DictionaryError::InvalidWord(word));
            }
            if lookup.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { lookup, ordered })
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate words in the order they were first listed
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_deduplicates() {
        let dict = Dictionary::new(["STAR", "LEAP", "STAR", "LEAP", "ARTS"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["STAR", "LEAP", "ARTS"]);
    }

    #[test]
    fn dictionary_lookup_is_case_sensitive() {
        let dict = Dictionary::new(["STAR"]).unwrap();
        assert!(dict.contains("STAR"));
        assert!(!dict.contains("Star"));
        assert!(!dict.contains("STARS"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn dictionary_rejects_empty_list() {
        let words: [&str; 0] = [];
        assert_eq!(Dictionary::new(words), Err(DictionaryError::Empty));
    }

    #[test]
    fn dictionary_rejects_malformed_words() {
        assert_eq!(
            Dictionary::new(["STAR", "star"]),
            Err(DictionaryError::InvalidWord("star".to_string()))
        );
        assert_eq!(
            Dictionary::new(["ST AR"]),
            Err(DictionaryError::InvalidWord("ST AR".to_string()))
        );
        assert_eq!(
            Dictionary::new([""]),
            Err(DictionaryError::InvalidWord(String::new()))
        );
    }
}
