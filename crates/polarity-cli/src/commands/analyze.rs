//! Analyze command.
//!
//! ```bash
//! polarity analyze "This is not bad at all!"
//! echo "very good" | polarity analyze --json
//! polarity analyze --file reviews.txt --lines --lexicon AFINN-111.txt
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use polarity_core::{
    GapPolicy, PolarityConfig, PolarityError, ScoredToken, SentimentAnalysis, SentimentLabel,
    WordChars,
};
use serde::Serialize;
use tracing::info;

use crate::error::CliError;

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze. Reads --file or stdin when omitted.
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze each non-blank line separately
    #[arg(long)]
    pub lines: bool,

    /// AFINN lexicon file (overrides config)
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Treat only ASCII letters, digits and underscore as word characters
    #[arg(long)]
    pub ascii: bool,

    /// Leave scores in the (2, 3) and (-3, -2) gaps unlabelled
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// One analysis as rendered to the user.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub tokens: &'a [ScoredToken],
    pub overall_score: f64,
    pub label: Option<SentimentLabel>,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(text: Option<&'a str>, analysis: &'a SentimentAnalysis, policy: GapPolicy) -> Self {
        Self {
            text,
            tokens: &analysis.tokens,
            overall_score: analysis.overall_score,
            label: policy.classify(analysis.overall_score),
        }
    }

    fn label_text(&self) -> &'static str {
        self.label.map(|l| l.as_str()).unwrap_or("Unclassified")
    }
}

/// Handle the analyze command.
pub fn handle_analyze(args: AnalyzeArgs, mut config: PolarityConfig) -> anyhow::Result<()> {
    if let Some(path) = &args.lexicon {
        config.lexicon.path = Some(path.clone());
    }
    if args.ascii {
        config.tokenizer.word_chars = WordChars::Ascii;
    }
    if args.strict {
        config.classifier.gap_policy = GapPolicy::Strict;
    }
    config.validate()?;

    let input = read_input(&args)?;
    let scorer = config
        .build_scorer()
        .context("Failed to prepare sentiment scorer")?;
    let policy = config.classifier.gap_policy;

    if args.lines {
        let lines = non_blank_lines(&input)?;
        let analyses = scorer.analyze_batch(&lines);
        info!(lines = lines.len(), "Analyzed input lines");

        let reports: Vec<AnalysisReport<'_>> = lines
            .iter()
            .zip(&analyses)
            .map(|(line, analysis)| AnalysisReport::new(Some(*line), analysis, policy))
            .collect();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            print!("{}", render_lines(&reports));
        }
    } else {
        let text = require_text(&input)?;
        let analysis = scorer.analyze(text);
        let report = AnalysisReport::new(None, &analysis, policy);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", render_report(&report));
        }
    }

    Ok(())
}

fn read_input(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::from)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Reject blank input.
pub fn require_text(input: &str) -> Result<&str, PolarityError> {
    if input.trim().is_empty() {
        Err(PolarityError::EmptyInput)
    } else {
        Ok(input)
    }
}

/// Non-blank lines, trimmed of line endings. Errors if there are none.
pub fn non_blank_lines(input: &str) -> Result<Vec<&str>, PolarityError> {
    let lines: Vec<&str> = input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(PolarityError::EmptyInput);
    }
    Ok(lines)
}

/// Human-readable rendering of a single analysis.
pub fn render_report(report: &AnalysisReport<'_>) -> String {
    let width = report
        .tokens
        .iter()
        .map(|t| t.text.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Word Sentiment Scores\n");
    for token in report.tokens {
        let pad = width - token.text.chars().count();
        out.push_str(&format!("  {}{}  {}\n", token.text, " ".repeat(pad), token.score));
    }
    out.push_str("\nOverall Sentiment\n");
    out.push_str(&format!("  Sentiment: {}\n", report.label_text()));
    out.push_str(&format!("  Score: {}\n", report.overall_score));
    out
}

/// One line per analysis: label, score, text.
pub fn render_lines(reports: &[AnalysisReport<'_>]) -> String {
    reports
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\n",
                r.label_text(),
                r.overall_score,
                r.text.unwrap_or_default()
            )
        })
        .collect()
}
