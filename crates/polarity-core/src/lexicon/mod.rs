//! Word polarity lexicons.
//!
//! The scorer only needs one capability from a lexicon: the base polarity of
//! a single lowercased word, with `0.0` for anything unknown. [`Lexicon`]
//! captures that, so callers can plug in a large word list, a fake with a
//! handful of fixed scores, or any read-only map.
//!
//! # Example
//!
//! ```
//! use polarity_core::lexicon::{Lexicon, WordListLexicon};
//!
//! let lexicon = WordListLexicon::parse_afinn("good\t3\nbad\t-3\n").unwrap();
//! assert_eq!(lexicon.score("good"), 3.0);
//! assert_eq!(lexicon.score("xyzzy"), 0.0);
//! ```

mod afinn;
mod default_words;
mod word_list;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

pub use word_list::WordListLexicon;

/// Source of base polarity scores.
///
/// Implementations must be safe for concurrent reads; the scorer never
/// mutates a lexicon.
pub trait Lexicon: Send + Sync {
    /// Base score for `word`, or `0.0` when the word is unknown.
    ///
    /// The scorer always passes a lowercased word.
    fn score(&self, word: &str) -> f64;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn score(&self, word: &str) -> f64 {
        (**self).score(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Box<L> {
    fn score(&self, word: &str) -> f64 {
        (**self).score(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    fn score(&self, word: &str) -> f64 {
        (**self).score(word)
    }
}

/// Exact-match lookup, no case folding.
impl Lexicon for HashMap<String, f64> {
    fn score(&self, word: &str) -> f64 {
        self.get(word).copied().unwrap_or(0.0)
    }
}
