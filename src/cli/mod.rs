//! Command-line interface for simscore.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **bench**: Rank every metric over the labeled fixture corpus
//! - **compare**: Score two strings under each metric
//! - **aliases**: Score two alias lists by their best-matching pair
//!
//! ## Usage
//!
//! ```text
//! # Rank metrics over the embedded corpus
//! simscore bench
//!
//! # Use your own corpus, measured against a fixed metric
//! simscore bench --fixtures corpus.json --reference lcs-coverage
//!
//! # Score one pair, showing the extracted substrings
//! simscore --verbose compare "Back and Forth" "Back & Forth"
//!
//! # Best match between two alias lists
//! simscore aliases --left "Camellia (かめりあ)" --right Camellia --right Erasure
//! ```

use clap::{Parser, Subcommand};

pub mod aliases;
pub mod bench;
pub mod compare;

#[derive(Parser)]
#[command(name = "simscore")]
#[command(version)]
#[command(about = "Compare string similarity metrics for near-duplicate metadata")]
#[command(
    long_about = "simscore scores how similar two strings, or two lists of alias strings, are.\n\nIt implements several interchangeable metrics, including a disjoint longest-common-substring coverage score, and ranks them over a corpus of hand-labeled pairs that should be considered equal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every metric over the fixture corpus
    Bench(bench::BenchArgs),

    /// Score two strings under each metric
    Compare(compare::CompareArgs),

    /// Score two alias lists by their best-matching pair
    Aliases(aliases::AliasesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
