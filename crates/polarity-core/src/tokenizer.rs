//! Text tokenizer.
//!
//! Splits text into maximal runs of word characters and single
//! non-word, non-space symbols, the alternation `\w+|[^\w\s]`.
//! Whitespace separates tokens and never produces one.
//!
//! In Unicode mode a word character is a letter (`\p{L}`), a number
//! (`\p{N}`) or `_`. Combining marks and connector punctuation other than
//! `_` are symbols, and the information separators `U+001C..=U+001F` count
//! as whitespace.
//!
//! ```
//! use polarity_core::tokenizer::tokenize;
//!
//! let tokens: Vec<String> = tokenize("great!!").into_iter().map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["great", "!", "!"]);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unicode-aware word pattern, compiled once.
static UNICODE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// ASCII-only word pattern, compiled once.
static ASCII_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Leading word character in Unicode mode, compiled once.
static UNICODE_WORD_START: OnceLock<Regex> = OnceLock::new();

fn unicode_pattern() -> &'static Regex {
    UNICODE_PATTERN.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}_]+|[^\p{L}\p{N}_\s\x1C-\x1F]")
            .expect("unicode token regex must compile")
    })
}

fn ascii_pattern() -> &'static Regex {
    ASCII_PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_]+|[^A-Za-z0-9_\s\x1C-\x1F]")
            .expect("ascii token regex must compile")
    })
}

fn unicode_word_start() -> &'static Regex {
    UNICODE_WORD_START
        .get_or_init(|| Regex::new(r"\A[\p{L}\p{N}_]").expect("word start regex must compile"))
}

/// Which characters count as word characters (`\w`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordChars {
    /// Unicode letters, numbers and underscore.
    #[default]
    Unicode,
    /// ASCII letters, digits and underscore only.
    Ascii,
}

/// Broad category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A run of word characters.
    Word,
    /// A single punctuation or symbol character.
    Symbol,
}

/// A contiguous slice of the input text.
///
/// `text` keeps the original casing; `start..end` are byte offsets into the
/// analyzed string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appeared in the input
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Token {
    /// Lowercased form used for table and lexicon matching.
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Regex-backed tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    word_chars: WordChars,
}

impl Tokenizer {
    /// Create a tokenizer with the given word-character definition.
    pub fn new(word_chars: WordChars) -> Self {
        Self { word_chars }
    }

    /// Word-character definition in use.
    pub fn word_chars(&self) -> WordChars {
        self.word_chars
    }

    fn pattern(&self) -> &'static Regex {
        match self.word_chars {
            WordChars::Unicode => unicode_pattern(),
            WordChars::Ascii => ascii_pattern(),
        }
    }

    /// Classify a token produced by this tokenizer.
    pub fn kind(&self, token: &Token) -> TokenKind {
        let is_word = match self.word_chars {
            WordChars::Unicode => unicode_word_start().is_match(&token.text),
            WordChars::Ascii => token
                .text
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_'),
        };
        if is_word {
            TokenKind::Word
        } else {
            TokenKind::Symbol
        }
    }

    /// Lazily yield tokens in input order.
    pub fn iter<'t>(&self, text: &'t str) -> impl Iterator<Item = Token> + 't {
        self.pattern().find_iter(text).map(|m| Token {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
    }

    /// Tokenize the whole input.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.iter(text).collect()
    }
}

/// Tokenize with the default (Unicode) tokenizer.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(text)
}
