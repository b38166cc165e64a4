//! Polarity CLI
//!
//! Command-line surface over `polarity-core`.
//!
//! # Commands
//!
//! - `analyze`: Score text from an argument, a file, or stdin
//! - `classify`: Label a raw score
//! - `lexicon`: Validate an AFINN word list
//!
//! Exit codes: 0 success, 1 error, 4 invalid input.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polarity_core::PolarityConfig;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use error::{exit_code_for_error, CliExitCode};

/// Polarity - rule-based lexicon sentiment scoring
#[derive(Parser)]
#[command(name = "polarity")]
#[command(version)]
#[command(about = "Score text sentiment with a word lexicon, negations and intensity modifiers")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML). Defaults to config/default.toml + POLARITY__* env vars
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the sentiment of text
    ///
    /// Reads TEXT, or --file, or stdin when neither is given.
    Analyze(commands::analyze::AnalyzeArgs),
    /// Print the sentiment label for a score
    Classify(commands::classify::ClassifyArgs),
    /// Validate an AFINN lexicon file
    Lexicon(commands::lexicon::LexiconArgs),
}

impl Commands {
    /// `lexicon` works on its own file and never reads configuration.
    fn needs_config(&self) -> bool {
        !matches!(self, Commands::Lexicon(_))
    }
}

fn load_config(path: Option<&PathBuf>) -> polarity_core::PolarityResult<PolarityConfig> {
    match path {
        Some(path) => PolarityConfig::from_file(path),
        None => PolarityConfig::load(),
    }
}

/// Load configuration only for commands that use it.
fn resolve_config(
    command: &Commands,
    path: Option<&PathBuf>,
) -> polarity_core::PolarityResult<Option<PolarityConfig>> {
    if command.needs_config() {
        load_config(path).map(Some)
    } else {
        Ok(None)
    }
}

fn init_logging(verbose: u8, config: Option<&PolarityConfig>) {
    let fallback = config
        .map(|c| c.logging.level.to_ascii_lowercase())
        .unwrap_or_else(|| "warn".to_string());

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let include_target = config.map(|c| c.logging.include_target).unwrap_or(false);

    fmt()
        .with_env_filter(filter)
        .with_target(include_target || verbose > 1)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli.command, cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.verbose, None);
            eprintln!("Error: {}", e);
            std::process::exit(exit_code_for_error(&e.into()));
        }
    };
    init_logging(cli.verbose, config.as_ref());
    debug!(?config, "Configuration ready");

    let result = match cli.command {
        Commands::Analyze(args) => {
            commands::analyze::handle_analyze(args, config.unwrap_or_default())
        }
        Commands::Classify(args) => {
            commands::classify::handle_classify(args, &config.unwrap_or_default())
        }
        Commands::Lexicon(args) => commands::lexicon::handle_lexicon(args),
    };

    let exit_code = match result {
        Ok(()) => CliExitCode::Success as i32,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit_code);
}
