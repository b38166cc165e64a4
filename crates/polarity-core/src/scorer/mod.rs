//! Negation- and modifier-aware sentiment scorer.
//!
//! Walks the token sequence once, left to right:
//!
//! 1. A negation word (`not`, `no`, `never`, `hardly`) scores `0`. If the
//!    next token has a nonzero base score it is emitted with the score
//!    inverted and consumed.
//! 2. A modifier word (`very`, `extremely`, ...) scores `0`. If the next
//!    token has a nonzero base score it is emitted with the modifier delta
//!    added and consumed.
//! 3. Any other token is emitted with its base score.
//!
//! A trigger followed by a zero-score token consumes nothing, so the
//! following token is scored on its own step. Stacked triggers therefore do
//! not compose: in `not very good` the `not` sees `very` (base `0`), then
//! `very` boosts `good`.
//!
//! # Example
//!
//! ```
//! use polarity_core::{SentimentLabel, SentimentScorer, WordListLexicon};
//!
//! let scorer = SentimentScorer::new(WordListLexicon::default());
//! let analysis = scorer.analyze("not good");
//!
//! assert_eq!(analysis.tokens[1].score, -3.0);
//! assert_eq!(analysis.label, SentimentLabel::VeryNegative);
//! ```

mod analysis;


use rayon::prelude::*;
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::lexicon::Lexicon;
use crate::rules::Trigger;
use crate::tokenizer::{Token, Tokenizer, WordChars};

pub use analysis::{ScoredToken, SentimentAnalysis};

/// Scores text against a lexicon.
#[derive(Debug, Clone)]
pub struct SentimentScorer<L> {
    lexicon: L,
    tokenizer: Tokenizer,
}

impl<L: Lexicon> SentimentScorer<L> {
    /// Create a scorer with the default (Unicode) tokenizer.
    pub fn new(lexicon: L) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::default(),
        }
    }

    /// Use a different word-character definition.
    pub fn with_word_chars(mut self, word_chars: WordChars) -> Self {
        self.tokenizer = Tokenizer::new(word_chars);
        self
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    fn base_score(&self, token: &Token) -> f64 {
        self.lexicon.score(&token.normalized())
    }

    /// Analyze one text.
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return SentimentAnalysis::empty();
        }

        let mut scored = Vec::with_capacity(tokens.len());
        let mut overall_score = 0.0;
        let mut emit = |text: &str, score: f64| {
            overall_score += score;
            scored.push(ScoredToken::new(text, score));
        };

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            let word = token.normalized();

            match Trigger::for_word(&word) {
                Some(trigger) => {
                    emit(&token.text, 0.0);
                    if let Some(next) = tokens.get(i + 1) {
                        let base = self.base_score(next);
                        if base != 0.0 {
                            let adjusted = trigger.apply(base);
                            trace!(trigger = %word, target = %next.text, base, adjusted, "Applied trigger");
                            emit(&next.text, adjusted);
                            i += 1;
                        }
                    }
                }
                None => emit(&token.text, self.lexicon.score(&word)),
            }

            i += 1;
        }

        let label = classify(overall_score);
        debug!(tokens = scored.len(), overall_score, %label, "Analyzed text");

        SentimentAnalysis {
            tokens: scored,
            overall_score,
            label,
        }
    }

    /// Analyze many texts in parallel. Output order matches input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<SentimentAnalysis>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.analyze(text.as_ref())).collect()
    }
}

impl Default for SentimentScorer<crate::lexicon::WordListLexicon> {
    fn default() -> Self {
        Self::new(crate::lexicon::WordListLexicon::default())
    }
}

/// Analyze `text` against `lexicon` with the default tokenizer.
pub fn analyze_sentiment<L: Lexicon + ?Sized>(text: &str, lexicon: &L) -> SentimentAnalysis {
    SentimentScorer::new(lexicon).analyze(text)
}
