//! Rule-based lexicon sentiment scoring.
//!
//! Assigns a polarity score to free-form text by summing per-token lexicon
//! scores, with adjustment for negation words (`not`, `never`, ...) and
//! intensity modifiers (`very`, `slightly`, ...), then buckets the total into
//! one of seven labels.
//!
//! # Modules
//!
//! - [`tokenizer`]: `\w+|[^\w\s]` tokenization with byte offsets
//! - [`rules`]: Negation set and modifier table
//! - [`lexicon`]: The [`Lexicon`] capability and an AFINN-backed word list
//! - [`scorer`]: Single-pass negation/modifier-aware scoring
//! - [`classifier`]: Score → [`SentimentLabel`] buckets
//! - [`config`]: TOML/environment configuration
//! - [`error`]: Error types and result aliases
//!
//! # Example
//!
//! ```
//! use polarity_core::{analyze_sentiment, SentimentLabel, WordListLexicon};
//!
//! let lexicon = WordListLexicon::default();
//! let analysis = analyze_sentiment("The plot was very good!", &lexicon);
//!
//! assert_eq!(analysis.overall_score, 4.0);
//! assert_eq!(analysis.label, SentimentLabel::VeryPositive);
//! assert_eq!(analysis.tokens.len(), 6);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod rules;
pub mod scorer;
pub mod tokenizer;

pub use classifier::{classify, classify_strict, GapPolicy, SentimentLabel};
pub use config::PolarityConfig;
pub use error::{PolarityError, PolarityResult};
pub use lexicon::{Lexicon, WordListLexicon};
pub use scorer::{analyze_sentiment, ScoredToken, SentimentAnalysis, SentimentScorer};
pub use tokenizer::{tokenize, Token, Tokenizer, WordChars};
