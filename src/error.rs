//! Error types for the sentiment store.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SentilexResult<T> = Result<T, SentilexError>;

/// All errors surfaced by the sentiment store.
#[derive(Debug, Error)]
pub enum SentilexError {
    /// A required input collaborator was missing at construction time.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// I/O failure while loading stopwords or the seed review corpus.
    /// Fatal at construction — the store cannot exist without its seed data.
    #[error("I/O error while loading seed data: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus line did not start with a single-digit rating in 0..=4.
    #[error("corrupt review record: {line:?}")]
    CorruptRecord { line: String },

    /// A caller-supplied argument failed validation before any state change.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A tracked word had an empty rating history at rescore time.
    /// Unreachable by construction; indicates a programming defect.
    #[error("empty rating history for tracked word {word:?}")]
    EmptyHistory { word: String },
}
