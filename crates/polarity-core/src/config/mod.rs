//! Configuration management.
//!
//! Configuration is optional: every field has a default, so an empty file
//! (or no file at all) yields the built-in lexicon, Unicode tokenization and
//! the extended gap policy.
//!
//! ```toml
//! [tokenizer]
//! word_chars = "ascii"
//!
//! [classifier]
//! gap_policy = "strict"
//!
//! [lexicon]
//! path = "data/AFINN-111.txt"
//! merge_builtin = true
//!
//! [logging]
//! level = "info"
//! ```

mod sub_configs;


use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PolarityError, PolarityResult};
use crate::lexicon::WordListLexicon;
use crate::scorer::SentimentScorer;

pub use sub_configs::{ClassifierConfig, LexiconConfig, LoggingConfig, TokenizerConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolarityConfig {
    pub tokenizer: TokenizerConfig,
    pub classifier: ClassifierConfig,
    pub lexicon: LexiconConfig,
    pub logging: LoggingConfig,
}

impl PolarityConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{POLARITY_ENV}.toml (environment-specific)
    /// 3. Environment variables with POLARITY__ prefix
    pub fn load() -> PolarityResult<Self> {
        let env = std::env::var("POLARITY_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("POLARITY")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: PolarityConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(env = %env, "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> PolarityResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PolarityError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: PolarityConfig = toml::from_str(&content).map_err(|e| {
            PolarityError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> PolarityResult<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LoggingConfig::LEVELS.contains(&level.as_str()) {
            return Err(PolarityError::ConfigError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LoggingConfig::LEVELS,
                self.logging.level
            )));
        }

        if let Some(path) = &self.lexicon.path {
            if !path.is_file() {
                return Err(PolarityError::ConfigError(format!(
                    "lexicon.path does not exist or is not a file: {}",
                    path.display()
                )));
            }
        } else if self.lexicon.merge_builtin {
            return Err(PolarityError::ConfigError(
                "lexicon.merge_builtin requires lexicon.path".into(),
            ));
        }

        Ok(())
    }

    /// Build the lexicon described by `[lexicon]`.
    pub fn build_lexicon(&self) -> PolarityResult<WordListLexicon> {
        match &self.lexicon.path {
            None => Ok(WordListLexicon::default()),
            Some(path) => {
                let loaded = WordListLexicon::from_afinn_file(path)?;
                if self.lexicon.merge_builtin {
                    let mut lexicon = WordListLexicon::default();
                    lexicon.merge(&loaded);
                    Ok(lexicon)
                } else {
                    Ok(loaded)
                }
            }
        }
    }

    /// Build a scorer from this configuration.
    pub fn build_scorer(&self) -> PolarityResult<SentimentScorer<WordListLexicon>> {
        let lexicon = self.build_lexicon()?;
        Ok(SentimentScorer::new(lexicon).with_word_chars(self.tokenizer.word_chars))
    }
}
