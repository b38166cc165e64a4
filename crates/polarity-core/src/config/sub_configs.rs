//! Sub-configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classifier::{GapPolicy, SentimentLabel};
use crate::scorer::SentimentAnalysis;
use crate::tokenizer::WordChars;

/// Tokenizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// `unicode` (default) or `ascii` word characters
    pub word_chars: WordChars,
}

/// Label classification configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// How to label scores in the table gaps
    pub gap_policy: GapPolicy,
}

impl ClassifierConfig {
    /// Label for an analysis under the configured gap policy.
    pub fn label_for(&self, analysis: &SentimentAnalysis) -> Option<SentimentLabel> {
        self.gap_policy.classify(analysis.overall_score)
    }
}

/// Lexicon source configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// AFINN file to load. The built-in list is used when unset.
    pub path: Option<PathBuf>,
    /// Layer the file over the built-in list instead of replacing it
    pub merge_builtin: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub const LEVELS: &'static [&'static str] = &["off", "error", "warn", "info", "debug", "trace"];
}
