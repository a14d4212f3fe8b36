//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for supplied quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered questions followed by an answer key
    Full,
    /// Questions only, answers hidden
    Quiz,
    /// JSON response body
    Json,
}

impl From<OutputFormat> for quizforge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Quiz => Self::Quiz,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for quizforge
#[derive(Parser, Debug)]
#[command(name = "quizforge")]
#[command(author, version, about = "Multiple-choice quizzes from a growing question bank")]
#[command(long_about = r#"
quizforge supplies multiple-choice questions for a topic and difficulty.

Questions are partly reused from a local question bank and partly generated
by a language model. Every generated question is added to the bank, so
popular topics get cheaper over time:

  fewer than 200 stored questions   ->  30% reused, 70% generated
  200 or more stored questions      ->  70% reused, 30% generated

Difficulties:
  simple flow (default):  easy, medium, hard
  bulk flow (--bulk):     easy, moderate, difficult, extreme

Configuration files are loaded from (in priority order):
1. QUIZFORGE_* environment variables
2. --config <path>     Explicit config file
3. ./quizforge.toml    Project-level config
4. ~/.config/quizforge/config.toml   Global config

Example:
  quizforge "Photosynthesis"
  quizforge "Roman history" -d hard -n 10
  quizforge "Linear algebra" --bulk -d extreme -n 25 -o json
"#)]
pub struct Cli {
    /// Topic to build the quiz for (not required with --show-config)
    pub topic: Option<String>,

    /// Difficulty level (defaults to "medium", or "moderate" with --bulk)
    #[arg(short, long, value_name = "LEVEL")]
    pub difficulty: Option<String>,

    /// Number of questions
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Use the four-level bulk difficulty scale
    #[arg(long)]
    pub bulk: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for the question shuffle (reproducible ordering)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
