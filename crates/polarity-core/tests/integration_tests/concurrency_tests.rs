//! Analyses share a read-only lexicon across threads.

use std::sync::Arc;
use std::thread;

use polarity_core::{SentimentScorer, WordListLexicon};

use super::helpers::sample_texts;

#[test]
fn test_parallel_threads_match_sequential() {
    let scorer = Arc::new(SentimentScorer::new(WordListLexicon::default()));
    let texts = sample_texts();
    let expected: Vec<_> = texts.iter().map(|t| scorer.analyze(t)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            let texts = texts.clone();
            thread::spawn(move || texts.iter().map(|t| scorer.analyze(t)).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_batch_matches_sequential() {
    let scorer = SentimentScorer::new(WordListLexicon::default());
    let texts: Vec<String> = (0..200)
        .map(|i| match i % 4 {
            0 => format!("review {i}: not bad"),
            1 => format!("review {i}: very good!"),
            2 => format!("review {i}: slightly awful"),
            _ => format!("review {i}"),
        })
        .collect();

    let batch = scorer.analyze_batch(&texts);
    assert_eq!(batch.len(), texts.len());
    for (text, analysis) in texts.iter().zip(&batch) {
        assert_eq!(analysis, &scorer.analyze(text));
    }
}
