//! Classify command.

use clap::Args;
use polarity_core::{GapPolicy, PolarityConfig};
use serde_json::json;

use crate::error::CliError;

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Aggregate score to label
    #[arg(allow_hyphen_values = true)]
    pub score: f64,

    /// Leave scores in the (2, 3) and (-3, -2) gaps unlabelled
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// Handle the classify command.
pub fn handle_classify(args: ClassifyArgs, config: &PolarityConfig) -> anyhow::Result<()> {
    if !args.score.is_finite() {
        return Err(CliError::InvalidInput(format!("score must be finite, got {}", args.score)).into());
    }

    let policy = if args.strict {
        GapPolicy::Strict
    } else {
        config.classifier.gap_policy
    };
    let label = policy.classify(args.score);

    if args.json {
        println!("{}", json!({ "score": args.score, "label": label }));
    } else {
        println!("{}", label.map(|l| l.as_str()).unwrap_or("Unclassified"));
    }
    Ok(())
}
