//! Built-in AFINN-style word list.
//!
//! A compact general-purpose list with integer scores in `[-5, 5]`. Load a
//! full AFINN file with [`WordListLexicon::from_afinn_file`] for real use.

use super::WordListLexicon;

const DEFAULT_WORDS: &[(&str, f64)] = &[
    // Strongly positive
    ("outstanding", 5.0),
    ("superb", 5.0),
    ("breathtaking", 5.0),
    ("amazing", 4.0),
    ("awesome", 4.0),
    ("brilliant", 4.0),
    ("fantastic", 4.0),
    ("wonderful", 4.0),
    ("fabulous", 4.0),
    ("win", 4.0),
    // Positive
    ("excellent", 3.0),
    ("good", 3.0),
    ("great", 3.0),
    ("love", 3.0),
    ("happy", 3.0),
    ("nice", 3.0),
    ("best", 3.0),
    ("beautiful", 3.0),
    ("enjoy", 2.0),
    ("like", 2.0),
    ("better", 2.0),
    ("fine", 2.0),
    ("glad", 3.0),
    ("pleased", 3.0),
    ("helpful", 2.0),
    ("interesting", 2.0),
    ("useful", 2.0),
    ("thanks", 2.0),
    // Mildly positive
    ("ok", 1.0),
    ("okay", 1.0),
    ("decent", 1.0),
    ("fair", 1.0),
    ("hope", 2.0),
    // Mildly negative
    ("boring", -1.0),
    ("dull", -1.0),
    ("mediocre", -1.0),
    ("confused", -2.0),
    ("difficult", -1.0),
    // Negative
    ("bad", -3.0),
    ("poor", -2.0),
    ("sad", -2.0),
    ("worse", -3.0),
    ("disappointing", -2.0),
    ("disappointed", -2.0),
    ("annoying", -2.0),
    ("frustrating", -2.0),
    ("problem", -2.0),
    ("wrong", -2.0),
    ("hate", -3.0),
    ("angry", -3.0),
    ("ugly", -3.0),
    ("worst", -3.0),
    ("terrible", -3.0),
    ("awful", -3.0),
    ("horrible", -3.0),
    // Strongly negative
    ("disaster", -2.0),
    ("catastrophic", -4.0),
    ("disgusting", -3.0),
    ("fraud", -4.0),
    ("torture", -4.0),
    ("hell", -4.0),
];

impl Default for WordListLexicon {
    /// Create a lexicon holding the built-in word list.
    ///
    /// Use [`WordListLexicon::new`] for an empty one.
    fn default() -> Self {
        DEFAULT_WORDS
            .iter()
            .map(|&(word, score)| (word.to_string(), score))
            .collect()
    }
}
