//! Bench command - rank every metric over the fixture corpus.
//!
//! Prints each metric's root-mean-square score and timing, then every fixture
//! on which a metric beat the reference (by default the top-ranked) metric.

use std::path::PathBuf;

use clap::Args;

use crate::bench::fixtures::FixtureCorpus;
use crate::bench::harness::{self, BenchReport, HarnessConfig};
use crate::cli::OutputFormat;
use crate::core::types::Metric;

/// Arguments for the bench command
#[derive(Args)]
pub struct BenchArgs {
    /// JSON fixture corpus to use instead of the embedded one
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Compare strings as given instead of lowercasing them first
    #[arg(long)]
    pub case_sensitive: bool,

    /// Measure other metrics against this one instead of the top-ranked
    #[arg(long, value_enum)]
    pub reference: Option<Metric>,

    /// Only run these metrics (repeatable; default: all)
    #[arg(short, long = "metric", value_enum)]
    pub metrics: Vec<Metric>,
}

impl BenchArgs {
    fn config(&self) -> HarnessConfig {
        HarnessConfig {
            case_sensitive: self.case_sensitive,
            reference: self.reference,
            metrics: self.metrics.clone(),
        }
    }
}

/// Execute the bench command
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or the reference metric is
/// not among the selected metrics.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: BenchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let corpus = match &args.fixtures {
        Some(path) => FixtureCorpus::load_from_file(path)?,
        None => FixtureCorpus::load_embedded()?,
    };

    let config = args.config();
    if verbose {
        eprintln!(
            "Corpus: {} pairs, {} alias lists ({})",
            corpus.pairs.len(),
            corpus.lists.len(),
            args.fixtures
                .as_ref()
                .map_or_else(|| "embedded".to_string(), |p| p.display().to_string())
        );
        eprintln!(
            "Case folding: {}",
            if config.case_sensitive { "off" } else { "on" }
        );
    }

    let registry = config.registry();
    let report = harness::run(&corpus, &registry, config.reference)?;

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report, &config)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &BenchReport) {
    for summary in &report.summaries {
        println!("{summary}");
    }

    for summary in report.summaries.iter().filter(|s| s.anomalies > 0) {
        println!(
            "{} scored {} folded-identical fixture(s) below 1.0",
            summary.metric, summary.anomalies
        );
    }

    for outscored in &report.outscored {
        println!("{outscored}");
    }
}

fn print_json_report(report: &BenchReport, config: &HarnessConfig) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "config": config,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &BenchReport) {
    println!("metric\tscore\telapsed_secs\tanomalies\treference");
    for summary in &report.summaries {
        println!(
            "{}\t{:.4}\t{:.6}\t{}\t{}",
            summary.metric,
            summary.score,
            summary.elapsed.as_secs_f64(),
            summary.anomalies,
            report.reference == Some(summary.metric),
        );
    }
}
