//! `sentilex` CLI — query and extend a labeled movie-review corpus.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use sentilex::SentimentStore;

#[derive(Parser)]
#[command(name = "sentilex", version, about = "Lexicon-based sentiment scoring over labeled movie reviews")]
struct Cli {
    /// Path to the stopword list, one lowercase word per line.
    #[arg(long)]
    stopwords: PathBuf,

    /// Path to the review corpus; appended reviews are written back to it.
    #[arg(long)]
    reviews: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mean score of a single word.
    Word { word: String },
    /// Total occurrences of a single word.
    Frequency { word: String },
    /// Score a piece of review text.
    Review { text: String },
    /// Classify review text into a named sentiment category.
    Classify { text: String },
    /// The n most frequent words, as a JSON array.
    TopFrequent { n: i32 },
    /// The n highest-scored words, as a JSON array.
    TopPositive { n: i32 },
    /// The n lowest-scored words, as a JSON array.
    TopNegative { n: i32 },
    /// Append a labeled review (rating 0-4) to the corpus.
    Append { rating: i32, text: String },
    /// Whether a word is a stopword.
    Stopword { word: String },
    /// Dictionary statistics, as a JSON object.
    Stats,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut store = SentimentStore::open(&cli.stopwords, &cli.reviews)
        .context("failed to open sentiment store")?;

    match cli.command {
        Command::Word { word } => println!("{}", store.word_sentiment(&word)?),
        Command::Frequency { word } => println!("{}", store.word_frequency(&word)?),
        Command::Review { text } => println!("{}", store.review_sentiment(&text)?),
        Command::Classify { text } => println!("{}", store.review_sentiment_name(&text)?),
        Command::TopFrequent { n } => {
            println!("{}", json!(store.most_frequent_words(n)?));
        }
        Command::TopPositive { n } => {
            println!("{}", json!(store.most_positive_words(n)?));
        }
        Command::TopNegative { n } => {
            println!("{}", json!(store.most_negative_words(n)?));
        }
        Command::Append { rating, text } => {
            let persisted = store.append_review(&text, rating)?;
            if persisted {
                println!("appended");
            } else {
                eprintln!("review scored in memory but could not be persisted");
                process::exit(1);
            }
        }
        Command::Stopword { word } => println!("{}", store.is_stop_word(&word)),
        Command::Stats => {
            println!(
                "{}",
                json!({
                    "dictionary_size": store.dictionary_size(),
                    "stopwords": store.stopword_count(),
                })
            );
        }
    }

    Ok(())
}
