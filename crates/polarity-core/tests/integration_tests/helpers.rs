//! Shared fixtures.

use polarity_core::Lexicon;

/// Lexicon with a fixed set of scores, lowercase exact match.
pub struct FakeLexicon {
    entries: Vec<(&'static str, f64)>,
}

impl FakeLexicon {
    pub fn new(entries: &[(&'static str, f64)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// good=3, great=3, happy=3, bad=-3, sad=-2, okay=1
    pub fn standard() -> Self {
        Self::new(&[
            ("good", 3.0),
            ("great", 3.0),
            ("happy", 3.0),
            ("bad", -3.0),
            ("sad", -2.0),
            ("okay", 1.0),
        ])
    }
}

impl Lexicon for FakeLexicon {
    fn score(&self, word: &str) -> f64 {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == word)
            .map(|&(_, score)| score)
            .unwrap_or(0.0)
    }
}

/// Sample texts covering triggers, punctuation, casing and unknown words.
pub fn sample_texts() -> Vec<&'static str> {
    vec![
        "",
        "   ",
        "good",
        "not good",
        "very good",
        "Not GOOD!!",
        "slightly happy",
        "hardly sad",
        "never, ever bad",
        "no no no bad",
        "totally totally great",
        "I'm okay-ish, not sad... absolutely happy?",
        "xyzzy plugh",
        "extremely",
        "café is good",
    ]
}
