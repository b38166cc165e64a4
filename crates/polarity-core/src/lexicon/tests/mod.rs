//! Tests for the lexicon module.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::PolarityError;
use crate::lexicon::{Lexicon, WordListLexicon};

#[test]
fn test_lexicon_creation() {
    let lexicon = WordListLexicon::new();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.len(), 0);
}

#[test]
fn test_insert_is_case_insensitive() {
    let mut lexicon = WordListLexicon::new();
    lexicon.insert("Happy", 3.0).unwrap();

    assert!(lexicon.contains("happy"));
    assert_eq!(lexicon.get("HAPPY"), Some(3.0));
    assert_eq!(lexicon.score("happy"), 3.0);
}

#[test]
fn test_unknown_word_scores_zero() {
    let lexicon = WordListLexicon::default();
    assert_eq!(lexicon.score("xyzzy"), 0.0);
    assert_eq!(lexicon.get("xyzzy"), None);
}

#[test]
fn test_insert_rejects_non_finite() {
    let mut lexicon = WordListLexicon::new();
    let err = lexicon.insert("weird", f64::INFINITY).unwrap_err();
    assert!(matches!(err, PolarityError::InvalidScore { .. }));
    assert!(lexicon.insert("weirder", f64::NAN).is_err());
    assert!(lexicon.is_empty());
}

#[test]
fn test_default_lexicon_has_words() {
    let lexicon = WordListLexicon::default();

    assert!(!lexicon.is_empty());
    assert_eq!(lexicon.score("good"), 3.0);
    assert_eq!(lexicon.score("great"), 3.0);
    assert_eq!(lexicon.score("bad"), -3.0);
    assert!(lexicon.score("terrible") < 0.0);
}

#[test]
fn test_default_lexicon_excludes_trigger_words() {
    let lexicon = WordListLexicon::default();
    for word in ["not", "no", "never", "hardly", "very", "extremely", "slightly"] {
        assert_eq!(lexicon.score(word), 0.0, "{word} should carry no base score");
    }
}

#[test]
fn test_lexicon_merge() {
    let mut first = WordListLexicon::new();
    first.insert("word1", 1.0).unwrap();
    first.insert("shared", 1.0).unwrap();

    let mut second = WordListLexicon::new();
    second.insert("word2", 2.0).unwrap();
    second.insert("shared", 4.0).unwrap();

    first.merge(&second);

    assert!(first.contains("word1"));
    assert!(first.contains("word2"));
    assert_eq!(first.get("shared"), Some(4.0));
}

#[test]
fn test_from_iterator_drops_non_finite() {
    let lexicon: WordListLexicon = vec![
        ("Good".to_string(), 3.0),
        ("broken".to_string(), f64::NAN),
    ]
    .into_iter()
    .collect();

    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.score("good"), 3.0);
}

#[test]
fn test_parse_afinn_basic() {
    let text = "abandon\t-2\nabilities\t2\n\n# comment line\nable\t1\r\n";
    let lexicon = WordListLexicon::parse_afinn(text).unwrap();

    assert_eq!(lexicon.len(), 3);
    assert_eq!(lexicon.score("abandon"), -2.0);
    assert_eq!(lexicon.score("able"), 1.0);
}

#[test]
fn test_parse_afinn_phrases_never_match_tokens() {
    let text = "does not work\t-3\ncool stuff\t3\n";
    let lexicon = WordListLexicon::parse_afinn(text).unwrap();

    assert!(lexicon.contains("does not work"));
    assert_eq!(lexicon.score("does"), 0.0);
    assert_eq!(lexicon.score("cool"), 0.0);
}

#[test]
fn test_parse_afinn_later_entry_wins() {
    let lexicon = WordListLexicon::parse_afinn("good\t2\ngood\t3\n").unwrap();
    assert_eq!(lexicon.score("good"), 3.0);
}

#[test]
fn test_parse_afinn_missing_tab() {
    let err = WordListLexicon::parse_afinn("good\t3\nbad -3\n").unwrap_err();
    match err {
        PolarityError::LexiconParse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_afinn_bad_score() {
    let err = WordListLexicon::parse_afinn("good\tthree\n").unwrap_err();
    assert!(err.to_string().contains("three"));
}

#[test]
fn test_parse_afinn_non_finite_score() {
    let err = WordListLexicon::parse_afinn("good\tinf\n").unwrap_err();
    assert!(matches!(err, PolarityError::InvalidScore { .. }));
}

#[test]
fn test_parse_afinn_empty_word() {
    let err = WordListLexicon::parse_afinn("\t3\n").unwrap_err();
    assert!(matches!(err, PolarityError::LexiconParse { line: 1, .. }));
}

#[test]
fn test_hashmap_lexicon_is_exact_match() {
    let mut map = HashMap::new();
    map.insert("good".to_string(), 3.0);

    assert_eq!(map.score("good"), 3.0);
    assert_eq!(map.score("Good"), 0.0);
}

#[test]
fn test_lexicon_through_smart_pointers() {
    let shared: Arc<WordListLexicon> = Arc::new(WordListLexicon::default());
    let boxed: Box<dyn Lexicon> = Box::new(WordListLexicon::default());

    assert_eq!(shared.score("good"), 3.0);
    assert_eq!(boxed.score("good"), 3.0);
    assert_eq!((&shared).score("bad"), -3.0);
}
