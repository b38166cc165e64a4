//! End-to-end scoring scenarios.

use polarity_core::{analyze_sentiment, SentimentLabel, SentimentScorer, WordListLexicon};

use super::helpers::FakeLexicon;

fn pairs(text: &str) -> (Vec<(String, f64)>, f64, SentimentLabel) {
    let analysis = analyze_sentiment(text, &FakeLexicon::standard());
    let tokens = analysis
        .tokens
        .into_iter()
        .map(|t| (t.text, t.score))
        .collect();
    (tokens, analysis.overall_score, analysis.label)
}

fn owned(tokens: &[(&str, f64)]) -> Vec<(String, f64)> {
    tokens.iter().map(|&(t, s)| (t.to_string(), s)).collect()
}

#[test]
fn test_empty_string() {
    assert_eq!(pairs(""), (vec![], 0.0, SentimentLabel::Neutral));
}

#[test]
fn test_not_good() {
    assert_eq!(
        pairs("not good"),
        (owned(&[("not", 0.0), ("good", -3.0)]), -3.0, SentimentLabel::VeryNegative)
    );
}

#[test]
fn test_very_good() {
    assert_eq!(
        pairs("very good"),
        (owned(&[("very", 0.0), ("good", 4.0)]), 4.0, SentimentLabel::VeryPositive)
    );
}

#[test]
fn test_unknown_word() {
    assert_eq!(
        pairs("xyzzy"),
        (owned(&[("xyzzy", 0.0)]), 0.0, SentimentLabel::Neutral)
    );
}

#[test]
fn test_trailing_negation() {
    assert_eq!(
        pairs("not"),
        (owned(&[("not", 0.0)]), 0.0, SentimentLabel::Neutral)
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        pairs("great!"),
        (owned(&[("great", 3.0), ("!", 0.0)]), 3.0, SentimentLabel::VeryPositive)
    );
}

#[test]
fn test_repeated_punctuation_tokenized_individually() {
    let (tokens, _, _) = pairs("great!!");
    assert_eq!(tokens, owned(&[("great", 3.0), ("!", 0.0), ("!", 0.0)]));
}

#[test]
fn test_every_modifier() {
    let cases = [
        ("very good", 4.0),
        ("extremely good", 5.0),
        ("absolutely good", 5.0),
        ("totally good", 5.0),
        ("slightly good", 2.5),
    ];
    for (text, expected) in cases {
        let (_, overall, _) = pairs(text);
        assert_eq!(overall, expected, "text {text:?}");
    }
}

#[test]
fn test_every_negation() {
    for negation in ["not", "no", "never", "hardly"] {
        let text = format!("{negation} happy");
        let (tokens, overall, label) = pairs(&text);
        assert_eq!(tokens[1].1, -3.0, "text {text:?}");
        assert_eq!(overall, -3.0);
        assert_eq!(label, SentimentLabel::VeryNegative);
    }
}

#[test]
fn test_each_label_reachable() {
    let cases = [
        ("very good", SentimentLabel::VeryPositive),
        ("okay okay", SentimentLabel::Positive),
        ("okay", SentimentLabel::SlightlyPositive),
        ("nothing here", SentimentLabel::Neutral),
        ("not okay", SentimentLabel::SlightlyNegative),
        ("sad", SentimentLabel::Negative),
        ("bad", SentimentLabel::VeryNegative),
    ];
    for (text, expected) in cases {
        let (_, _, label) = pairs(text);
        assert_eq!(label, expected, "text {text:?}");
    }
}

#[test]
fn test_gap_scores_use_extended_buckets() {
    let analysis = analyze_sentiment("slightly happy", &FakeLexicon::standard());
    assert_eq!(analysis.overall_score, 2.5);
    assert_eq!(analysis.label, SentimentLabel::Positive);
    assert_eq!(analysis.strict_label(), None);

    let analysis = analyze_sentiment("slightly happy, not great, okay", &FakeLexicon::standard());
    assert_eq!(analysis.overall_score, 0.5);
    assert_eq!(analysis.strict_label(), Some(SentimentLabel::SlightlyPositive));
}

#[test]
fn test_builtin_lexicon_sentence() {
    let scorer = SentimentScorer::new(WordListLexicon::default());
    let analysis = scorer.analyze("The acting was terrible, but the music was absolutely wonderful!");

    // terrible -3, wonderful 4 + 2
    assert_eq!(analysis.overall_score, 3.0);
    assert_eq!(analysis.label, SentimentLabel::VeryPositive);
}

#[test]
fn test_json_output_shape() {
    let analysis = analyze_sentiment("not bad", &FakeLexicon::standard());
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["overall_score"], 3.0);
    assert_eq!(json["label"], "very_positive");
    assert_eq!(json["tokens"][1]["text"], "bad");
    assert_eq!(json["tokens"][1]["score"], 3.0);
}
