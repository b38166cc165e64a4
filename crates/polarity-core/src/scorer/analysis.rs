//! Analysis output types.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify_strict, SentimentLabel};

/// A token paired with its adjusted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    /// Token text with original casing
    pub text: String,
    /// Score after negation/modifier adjustment
    pub score: f64,
}

impl ScoredToken {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Result of analyzing one text.
///
/// `tokens` holds one entry per input token, in input order. `overall_score`
/// is the left-to-right sum of their scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Scored tokens in input order
    pub tokens: Vec<ScoredToken>,
    /// Sum of all token scores
    pub overall_score: f64,
    /// Polarity bucket for `overall_score`
    pub label: SentimentLabel,
}

impl SentimentAnalysis {
    /// Analysis of empty input.
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            overall_score: 0.0,
            label: SentimentLabel::Neutral,
        }
    }

    /// Re-sum token scores in order. Always equals `overall_score`.
    pub fn score_sum(&self) -> f64 {
        self.tokens.iter().fold(0.0, |acc, t| acc + t.score)
    }

    /// Label from the literal interval table, `None` inside its gaps.
    pub fn strict_label(&self) -> Option<SentimentLabel> {
        classify_strict(self.overall_score)
    }

    /// Tokens with a positive adjusted score.
    pub fn positive_tokens(&self) -> impl Iterator<Item = &ScoredToken> {
        self.tokens.iter().filter(|t| t.score > 0.0)
    }

    /// Tokens with a negative adjusted score.
    pub fn negative_tokens(&self) -> impl Iterator<Item = &ScoredToken> {
        self.tokens.iter().filter(|t| t.score < 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for SentimentAnalysis {
    fn default() -> Self {
        Self::empty()
    }
}
