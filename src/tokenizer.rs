//! Shared tokenizer and stopword filtering for review text.

use std::collections::HashSet;
use std::io::BufRead;

/// Tokens shorter than this are discarded.
const MIN_TOKEN_LEN: usize = 2;

/// Deterministic tokenizer with an injected stopword set.
///
/// A token is a maximal run of ASCII letters, digits, or apostrophes of
/// length >= 2, lowercased. The stopword set is loaded once at construction
/// and never changes.
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Load the stopword set from a reader, one word per line.
    ///
    /// Lines are lowercased and trimmed defensively even though the source is
    /// expected to be lowercase already.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut stopwords = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            stopwords.insert(line.trim().to_lowercase());
        }
        Ok(Self { stopwords })
    }

    /// Tokenize text into lowercase terms, keeping stopwords.
    ///
    /// Splits on any character that is not an ASCII letter, digit, or
    /// apostrophe and drops fragments shorter than 2 characters.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '\''))
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .map(|s| s.to_string())
            .collect()
    }

    /// Whether the normalized word is in the stopword set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stopwords.contains(&word.trim().to_lowercase())
    }

    /// Number of loaded stopwords.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}
