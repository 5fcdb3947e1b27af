//! Lexicon-based sentiment scoring over labeled movie reviews.
//!
//! The crate builds an in-memory sentiment model from a corpus of review
//! lines, each labeled with a rating from 0 (negative) to 4 (positive).
//! Every non-stopword gets a score equal to the mean rating of the reviews
//! it appeared in; review text is then scored as the mean over its distinct
//! recognized words. New reviews can be appended at runtime and are folded
//! into the model and persisted to an append sink in the corpus line format.

pub mod error;
pub mod rating;
pub mod store;
pub mod tokenizer;

pub use error::{SentilexError, SentilexResult};
pub use store::SentimentStore;
pub use tokenizer::Tokenizer;
