//! Negation and intensity-modifier tables.
//!
//! Both tables are process-wide constants and expect lowercased words.

/// Intensity modifiers and the delta they add to the following word's base score.
pub const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.0),
    ("extremely", 2.0),
    ("absolutely", 2.0),
    ("totally", 2.0),
    ("slightly", -0.5),
];

/// Words that invert the following word's base score.
pub const NEGATIONS: &[&str] = &["not", "no", "never", "hardly"];

/// Delta for a modifier word, if it is one.
pub fn modifier_delta(word: &str) -> Option<f64> {
    MODIFIERS
        .iter()
        .find(|(modifier, _)| *modifier == word)
        .map(|&(_, delta)| delta)
}

/// Whether `word` is a negation word.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

/// A word that adjusts the score of the word after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Invert the following base score.
    Negation,
    /// Add a delta to the following base score.
    Modifier(f64),
}

impl Trigger {
    /// Look up the trigger for a lowercased word. Negation wins if a word is in both tables.
    pub fn for_word(word: &str) -> Option<Trigger> {
        if is_negation(word) {
            Some(Trigger::Negation)
        } else {
            modifier_delta(word).map(Trigger::Modifier)
        }
    }

    /// Adjusted score for a following word with the given base score.
    #[inline]
    pub fn apply(&self, base: f64) -> f64 {
        match self {
            Trigger::Negation => -base,
            Trigger::Modifier(delta) => base + delta,
        }
    }
}
