//! Lexicon validation command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use polarity_core::WordListLexicon;
use serde_json::json;
use tracing::info;

/// Arguments for the lexicon command.
#[derive(Args, Debug)]
pub struct LexiconArgs {
    /// AFINN file to validate
    pub path: PathBuf,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// Counts reported for a valid lexicon.
#[derive(Debug, Default, PartialEq)]
pub struct LexiconSummary {
    pub entries: usize,
    pub positive: usize,
    pub negative: usize,
    pub phrases: usize,
}

impl LexiconSummary {
    pub fn of(lexicon: &WordListLexicon) -> Self {
        lexicon.iter().fold(Self::default(), |mut acc, (word, score)| {
            acc.entries += 1;
            if score > 0.0 {
                acc.positive += 1;
            } else if score < 0.0 {
                acc.negative += 1;
            }
            if word.contains(char::is_whitespace) {
                acc.phrases += 1;
            }
            acc
        })
    }
}

/// Handle the lexicon command.
pub fn handle_lexicon(args: LexiconArgs) -> anyhow::Result<()> {
    let lexicon = WordListLexicon::from_afinn_file(&args.path)
        .with_context(|| format!("Invalid lexicon {}", args.path.display()))?;
    let summary = LexiconSummary::of(&lexicon);
    info!(path = %args.path.display(), entries = summary.entries, "Lexicon is valid");

    if args.json {
        println!(
            "{}",
            json!({
                "path": args.path,
                "entries": summary.entries,
                "positive": summary.positive,
                "negative": summary.negative,
                "phrases": summary.phrases,
            })
        );
    } else {
        println!("{}: {} entries", args.path.display(), summary.entries);
        println!("  positive: {}", summary.positive);
        println!("  negative: {}", summary.negative);
        println!("  phrases (never matched): {}", summary.phrases);
    }
    Ok(())
}
