//! In-memory word list lexicon.

use std::collections::HashMap;

use crate::error::{PolarityError, PolarityResult};

use super::Lexicon;

/// A case-insensitive word → score map.
///
/// # Example
///
/// ```
/// use polarity_core::lexicon::{Lexicon, WordListLexicon};
///
/// let mut lexicon = WordListLexicon::new();
/// lexicon.insert("Splendid", 3.0).unwrap();
/// assert_eq!(lexicon.score("splendid"), 3.0);
/// assert_eq!(lexicon.get("SPLENDID"), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WordListLexicon {
    words: HashMap<String, f64>,
}

impl WordListLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add or replace a word. Scores must be finite.
    pub fn insert(&mut self, word: &str, score: f64) -> PolarityResult<()> {
        if !score.is_finite() {
            return Err(PolarityError::InvalidScore {
                word: word.to_string(),
                value: score,
            });
        }
        self.words.insert(word.to_lowercase(), score);
        Ok(())
    }

    /// Score for a word, or `None` if it is not listed.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is listed.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of listed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, score)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.words.iter().map(|(word, score)| (word.as_str(), *score))
    }

    /// Merge another lexicon into this one.
    ///
    /// Existing words are overwritten by the other lexicon's values.
    pub fn merge(&mut self, other: &WordListLexicon) {
        for (word, score) in &other.words {
            self.words.insert(word.clone(), *score);
        }
    }
}

impl Lexicon for WordListLexicon {
    fn score(&self, word: &str) -> f64 {
        match self.words.get(word) {
            Some(score) => *score,
            None => self.get(word).unwrap_or(0.0),
        }
    }
}

impl FromIterator<(String, f64)> for WordListLexicon {
    /// Collect entries, silently dropping non-finite scores.
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for (word, score) in iter {
            if score.is_finite() {
                lexicon.words.insert(word.to_lowercase(), score);
            }
        }
        lexicon
    }
}
