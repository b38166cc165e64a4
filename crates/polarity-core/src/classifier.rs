//! Sentiment label classification.
//!
//! Maps an aggregate polarity score to one of seven buckets:
//!
//! | Score | Label |
//! |---|---|
//! | `s >= 3` | Very Positive |
//! | `1 < s <= 2` | Positive |
//! | `0 < s <= 1` | Slightly Positive |
//! | `s == 0` | Neutral |
//! | `-1 <= s < 0` | Slightly Negative |
//! | `-2 <= s < -1` | Negative |
//! | `s <= -3` | Very Negative |
//!
//! The table leaves `(2, 3)` and `(-3, -2)` uncovered. Scores such as `2.5`
//! ("slightly" + a base-3 word) land there, so [`GapPolicy`] decides what
//! happens: [`GapPolicy::Extend`] widens Positive/Negative to the next bucket
//! edge, [`GapPolicy::Strict`] leaves the score unlabelled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete polarity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// Human-readable label text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::SlightlyPositive => "Slightly Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::SlightlyNegative => "Slightly Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }

    /// All labels, most positive first.
    pub fn all() -> &'static [SentimentLabel] {
        &[
            SentimentLabel::VeryPositive,
            SentimentLabel::Positive,
            SentimentLabel::SlightlyPositive,
            SentimentLabel::Neutral,
            SentimentLabel::SlightlyNegative,
            SentimentLabel::Negative,
            SentimentLabel::VeryNegative,
        ]
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            SentimentLabel::VeryPositive | SentimentLabel::Positive | SentimentLabel::SlightlyPositive
        )
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            SentimentLabel::VeryNegative | SentimentLabel::Negative | SentimentLabel::SlightlyNegative
        )
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to treat scores in the uncovered `(2, 3)` and `(-3, -2)` ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPolicy {
    /// `1 < s < 3` is Positive and `-3 < s < -1` is Negative.
    #[default]
    Extend,
    /// Apply the table literally; gap scores get no label.
    Strict,
}

impl GapPolicy {
    /// Classify `score` under this policy.
    pub fn classify(&self, score: f64) -> Option<SentimentLabel> {
        match self {
            GapPolicy::Extend => Some(classify(score)),
            GapPolicy::Strict => classify_strict(score),
        }
    }
}

/// Classify a score, extending Positive/Negative across the table gaps.
///
/// NaN is Neutral.
pub fn classify(score: f64) -> SentimentLabel {
    if score >= 3.0 {
        SentimentLabel::VeryPositive
    } else if score > 1.0 {
        SentimentLabel::Positive
    } else if score > 0.0 {
        SentimentLabel::SlightlyPositive
    } else if score == 0.0 {
        SentimentLabel::Neutral
    } else if score >= -1.0 {
        SentimentLabel::SlightlyNegative
    } else if score > -3.0 {
        SentimentLabel::Negative
    } else if score <= -3.0 {
        SentimentLabel::VeryNegative
    } else {
        SentimentLabel::Neutral
    }
}

/// Classify a score using the literal interval table.
///
/// Returns `None` for scores in `(2, 3)`, `(-3, -2)`, or NaN.
pub fn classify_strict(score: f64) -> Option<SentimentLabel> {
    if score >= 3.0 {
        Some(SentimentLabel::VeryPositive)
    } else if score > 1.0 && score <= 2.0 {
        Some(SentimentLabel::Positive)
    } else if score > 0.0 && score <= 1.0 {
        Some(SentimentLabel::SlightlyPositive)
    } else if score == 0.0 {
        Some(SentimentLabel::Neutral)
    } else if (-1.0..0.0).contains(&score) {
        Some(SentimentLabel::SlightlyNegative)
    } else if (-2.0..-1.0).contains(&score) {
        Some(SentimentLabel::Negative)
    } else if score <= -3.0 {
        Some(SentimentLabel::VeryNegative)
    } else {
        None
    }
}
