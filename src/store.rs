//! The sentiment store: per-word rating history, derived scores, and queries.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::{SentilexError, SentilexResult};
use crate::rating::{self, MAX_RATING, MIN_RATING};
use crate::tokenizer::Tokenizer;

/// In-memory sentiment model over a labeled review corpus.
///
/// Owns all derived state: a per-word rating history, per-word occurrence
/// counts, and a per-word score kept equal to the arithmetic mean of that
/// word's rating history. Constructed from a stopword source and a review
/// corpus source; newly submitted reviews are appended to `sink` in the same
/// line format the corpus uses (`<rating><space><text>`), so the sink can be
/// replayed as a corpus source later.
///
/// Single-threaded by design: only [`SentimentStore::append_review`] mutates
/// state after construction.
pub struct SentimentStore<W: Write> {
    tokenizer: Tokenizer,
    /// word → ratings observed for it, at most one entry per review line.
    ratings: HashMap<String, Vec<u8>>,
    /// word → total occurrences, counting repeats within a line.
    occurrences: HashMap<String, usize>,
    /// word → mean of its rating history. Rebuilt after every ingest.
    scores: HashMap<String, f64>,
    sink: W,
}

impl SentimentStore<File> {
    /// Open a store over files on disk.
    ///
    /// The reviews file doubles as the append sink, so reviews submitted via
    /// [`SentimentStore::append_review`] extend the corpus in place.
    pub fn open(stopwords: &Path, reviews: &Path) -> SentilexResult<Self> {
        if !stopwords.exists() {
            return Err(SentilexError::MissingInput("stopwords file"));
        }
        if !reviews.exists() {
            return Err(SentilexError::MissingInput("reviews file"));
        }
        let stopword_reader = BufReader::new(File::open(stopwords)?);
        let corpus_reader = BufReader::new(File::open(reviews)?);
        let sink = OpenOptions::new().append(true).open(reviews)?;
        Self::new(stopword_reader, corpus_reader, sink)
    }
}

impl<W: Write> SentimentStore<W> {
    /// Build a store from a stopword source, a review corpus source, and an
    /// append sink for new reviews.
    ///
    /// Each corpus line must start with a single-digit rating in `0..=4`
    /// followed by the review text. Loading failures are fatal: the store
    /// cannot exist without its seed data.
    pub fn new(
        stopwords: impl BufRead,
        reviews: impl BufRead,
        sink: W,
    ) -> SentilexResult<Self> {
        let tokenizer = Tokenizer::from_reader(stopwords)?;
        let mut store = Self {
            tokenizer,
            ratings: HashMap::new(),
            occurrences: HashMap::new(),
            scores: HashMap::new(),
            sink,
        };

        for line in reviews.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            store.ingest_line(line.trim())?;
        }
        store.rescore()?;

        debug!(
            "loaded {} stopwords, {} tracked words",
            store.tokenizer.stopword_count(),
            store.scores.len()
        );
        Ok(store)
    }

    /// Mean score of a word across every review it appeared in, or
    /// [`rating::UNKNOWN`] if the store has never scored it.
    ///
    /// Lookup is case-insensitive and ignores surrounding whitespace.
    pub fn word_sentiment(&self, word: &str) -> SentilexResult<f64> {
        validate_text(word, "word")?;
        Ok(self
            .scores
            .get(&normalize(word))
            .copied()
            .unwrap_or(rating::UNKNOWN))
    }

    /// Total occurrences of a word across the corpus, counting repeats within
    /// a single review. Returns 0 for untracked words.
    pub fn word_frequency(&self, word: &str) -> SentilexResult<usize> {
        validate_text(word, "word")?;
        Ok(self.occurrences.get(&normalize(word)).copied().unwrap_or(0))
    }

    /// Sentiment of a piece of review text: the mean score of its *distinct*
    /// recognized words, ignoring stopwords and words the store has never
    /// seen. Returns [`rating::UNKNOWN`] when no word qualifies.
    pub fn review_sentiment(&self, review: &str) -> SentilexResult<f64> {
        validate_text(review, "review")?;

        let unique: HashSet<String> = self.tokenizer.tokenize(review).into_iter().collect();
        let mut sum = 0.0;
        let mut recognized = 0usize;
        for word in &unique {
            if self.tokenizer.is_stop_word(word) {
                continue;
            }
            if let Some(score) = self.scores.get(word) {
                sum += score;
                recognized += 1;
            }
        }

        if recognized == 0 {
            Ok(rating::UNKNOWN)
        } else {
            Ok(sum / recognized as f64)
        }
    }

    /// [`SentimentStore::review_sentiment`] mapped onto the fixed category
    /// scale ("negative" .. "positive", or "unknown").
    pub fn review_sentiment_name(&self, review: &str) -> SentilexResult<&'static str> {
        Ok(rating::category_name(self.review_sentiment(review)?))
    }

    /// Up to `n` words by descending occurrence count.
    ///
    /// Ties break by ascending lexical order so results are reproducible.
    pub fn most_frequent_words(&self, n: i32) -> SentilexResult<Vec<String>> {
        validate_count(n)?;
        let mut entries: Vec<(&String, usize)> =
            self.occurrences.iter().map(|(w, c)| (w, *c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        Ok(take_words(entries, n))
    }

    /// Up to `n` words by descending score, ties by ascending lexical order.
    pub fn most_positive_words(&self, n: i32) -> SentilexResult<Vec<String>> {
        validate_count(n)?;
        let mut entries: Vec<(&String, f64)> =
            self.scores.iter().map(|(w, s)| (w, *s)).collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        Ok(take_words(entries, n))
    }

    /// Up to `n` words by ascending score, ties by ascending lexical order.
    pub fn most_negative_words(&self, n: i32) -> SentilexResult<Vec<String>> {
        validate_count(n)?;
        let mut entries: Vec<(&String, f64)> =
            self.scores.iter().map(|(w, s)| (w, *s)).collect();
        entries.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        Ok(take_words(entries, n))
    }

    /// Record a new labeled review.
    ///
    /// Writes `<rating><space><review>` plus a line terminator to the sink,
    /// then folds the same line into the in-memory model and rescores every
    /// tracked word. A sink write failure is reported via `Ok(false)` rather
    /// than an error; the in-memory state still updates from the parsed line,
    /// so the return value describes durability only.
    pub fn append_review(&mut self, review: &str, review_rating: i32) -> SentilexResult<bool> {
        validate_text(review, "review")?;
        if !(MIN_RATING..=MAX_RATING).contains(&review_rating) {
            return Err(SentilexError::InvalidArgument(format!(
                "rating {review_rating} is outside {MIN_RATING}..={MAX_RATING}"
            )));
        }

        let line = format!("{review_rating} {review}");
        let persisted = match writeln!(self.sink, "{line}").and_then(|()| self.sink.flush()) {
            Ok(()) => true,
            Err(err) => {
                warn!("review sink write failed: {err}");
                false
            }
        };

        self.ingest_line(line.trim())?;
        self.rescore()?;
        Ok(persisted)
    }

    /// Number of distinct words with a score.
    pub fn dictionary_size(&self) -> usize {
        self.scores.len()
    }

    /// Whether the normalized word is in the stopword set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.tokenizer.is_stop_word(word)
    }

    /// Number of loaded stopwords.
    pub fn stopword_count(&self) -> usize {
        self.tokenizer.stopword_count()
    }

    /// Fold one corpus-format line into the rating history and occurrence
    /// counts. A word's rating is recorded at most once per line; occurrences
    /// count every repeat.
    fn ingest_line(&mut self, line: &str) -> SentilexResult<()> {
        let review_rating = line
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|r| *r <= MAX_RATING as u32)
            .ok_or_else(|| SentilexError::CorruptRecord {
                line: line.to_string(),
            })? as u8;

        let tokens = self.tokenizer.tokenize(line);
        let mut seen_in_line: HashSet<&str> = HashSet::new();
        for token in &tokens {
            if self.tokenizer.is_stop_word(token) {
                continue;
            }
            *self.occurrences.entry(token.clone()).or_insert(0) += 1;
            if seen_in_line.insert(token) {
                self.ratings.entry(token.clone()).or_default().push(review_rating);
            }
        }
        Ok(())
    }

    /// Rebuild every word's score as the mean of its rating history.
    fn rescore(&mut self) -> SentilexResult<()> {
        self.scores.clear();
        for (word, history) in &self.ratings {
            if history.is_empty() {
                return Err(SentilexError::EmptyHistory { word: word.clone() });
            }
            let sum: u32 = history.iter().map(|r| u32::from(*r)).sum();
            self.scores
                .insert(word.clone(), f64::from(sum) / history.len() as f64);
        }
        Ok(())
    }
}

/// Lowercase and trim a lookup key.
fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Reject null-equivalent text: empty or whitespace-only.
fn validate_text(text: &str, what: &str) -> SentilexResult<()> {
    if text.trim().is_empty() {
        return Err(SentilexError::InvalidArgument(format!(
            "{what} must not be empty or blank"
        )));
    }
    Ok(())
}

/// Reject negative result counts.
fn validate_count(n: i32) -> SentilexResult<()> {
    if n < 0 {
        return Err(SentilexError::InvalidArgument(format!(
            "result count must be non-negative, got {n}"
        )));
    }
    Ok(())
}

/// Keep the first `n` words of a sorted entry list.
fn take_words<T>(entries: Vec<(&String, T)>, n: i32) -> Vec<String> {
    entries
        .into_iter()
        .take(n as usize)
        .map(|(word, _)| word.clone())
        .collect()
}
