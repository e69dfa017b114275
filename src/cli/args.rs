//! Command line argument parsing for the textcat CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// textcat - a multinomial Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "textcat")]
#[command(about = "A multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextcatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextcatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a JSON corpus and classify documents
    #[command(name = "classify")]
    Classify(ClassifyArgs),

    /// Run the built-in spam/not-spam demonstration
    #[command(name = "demo")]
    Demo,

    /// Train on a JSON corpus and report model statistics
    #[command(name = "stats")]
    Stats(StatsArgs),
}

/// Arguments for the classify command
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the JSON corpus file ({"label": ["document", ...], ...})
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Include per-class log-probability scores in the output
    #[arg(long)]
    pub show_scores: bool,

    /// Documents to classify (read from stdin, one per line, when omitted)
    pub documents: Vec<String>,
}

/// Arguments for the stats command
#[derive(clap::Args, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the JSON corpus file ({"label": ["document", ...], ...})
    #[arg(short, long)]
    pub corpus: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
