use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::types::{is_anomaly, Metric};
use crate::matching::case_fold::fold_case;
use crate::matching::cover::{cover_matches, CoverMatch};
use crate::matching::registry::ComparerRegistry;

#[derive(Args)]
pub struct CompareArgs {
    /// First string
    #[arg(required = true)]
    pub a: String,

    /// Second string
    #[arg(required = true)]
    pub b: String,

    /// Only report these metrics (repeatable; default: all)
    #[arg(short, long = "metric", value_enum)]
    pub metrics: Vec<Metric>,

    /// Lowercase both strings before scoring
    #[arg(short, long)]
    pub ignore_case: bool,
}

struct PairScores {
    scores: Vec<(Metric, f64)>,
    cover: Vec<CoverMatch>,
    /// Strings the substring cover was computed on
    cover_inputs: (String, String),
}

pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let registry = build_registry(&args.metrics, args.ignore_case);
    let result = score_pair(&registry, &args.a, &args.b, args.ignore_case);

    match format {
        OutputFormat::Text => print_text_comparison(&args, &result, verbose),
        OutputFormat::Json => print_json_comparison(&args, &result)?,
        OutputFormat::Tsv => print_tsv_comparison(&result),
    }

    Ok(())
}

pub(crate) fn build_registry(metrics: &[Metric], ignore_case: bool) -> ComparerRegistry {
    if metrics.is_empty() {
        ComparerRegistry::with_metrics(&Metric::ALL, ignore_case)
    } else {
        ComparerRegistry::with_metrics(metrics, ignore_case)
    }
}

fn score_pair(registry: &ComparerRegistry, a: &str, b: &str, ignore_case: bool) -> PairScores {
    let scores = registry
        .iter()
        .map(|(metric, comparer)| (metric, comparer.compare(a, b)))
        .collect();

    let cover_inputs = if ignore_case {
        (fold_case(a), fold_case(b))
    } else {
        (a.to_string(), b.to_string())
    };
    let cover = cover_matches(&cover_inputs.0, &cover_inputs.1);

    PairScores {
        scores,
        cover,
        cover_inputs,
    }
}

/// One extracted substring with its text, for JSON output
#[derive(Serialize)]
struct CoverSubstring<'a> {
    text: String,
    #[serde(flatten)]
    location: &'a CoverMatch,
}

/// Text of a match, taken from the `a` side
fn matched_text(s: &str, m: &CoverMatch) -> String {
    s.chars().skip(m.a_start).take(m.length).collect()
}

fn cover_total(cover: &[CoverMatch]) -> usize {
    cover.iter().map(|m| m.length).sum()
}

fn print_text_comparison(args: &CompareArgs, result: &PairScores, verbose: bool) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nA: {}", args.a);
    println!("B: {}", args.b);
    println!("Case folding: {}", if args.ignore_case { "on" } else { "off" });

    println!("\nSimilarity Scores:");
    for (metric, score) in &result.scores {
        if is_anomaly(*score) {
            println!("  {metric}: {score:.3} (disagrees with folded equality)");
        } else {
            println!("  {metric}: {score:.3}");
        }
    }

    println!(
        "\nSubstring cover: {} chars in {} substring(s)",
        cover_total(&result.cover),
        result.cover.len()
    );
    if verbose {
        for m in &result.cover {
            println!(
                "  {:?} at a[{}], b[{}]",
                matched_text(&result.cover_inputs.0, m),
                m.a_start,
                m.b_start
            );
        }
    }
}

fn print_json_comparison(args: &CompareArgs, result: &PairScores) -> anyhow::Result<()> {
    let scores: serde_json::Map<String, serde_json::Value> = result
        .scores
        .iter()
        .map(|(metric, score)| (metric.to_string(), serde_json::json!(score)))
        .collect();

    let substrings: Vec<CoverSubstring> = result
        .cover
        .iter()
        .map(|m| CoverSubstring {
            text: matched_text(&result.cover_inputs.0, m),
            location: m,
        })
        .collect();

    let output = serde_json::json!({
        "a": args.a,
        "b": args.b,
        "ignore_case": args.ignore_case,
        "scores": scores,
        "cover": {
            "length": cover_total(&result.cover),
            "substrings": substrings,
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(result: &PairScores) {
    println!("metric\tscore");
    for (metric, score) in &result.scores {
        println!("{metric}\t{score:.4}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_pair_all_metrics() {
        let registry = build_registry(&[], false);
        let result = score_pair(&registry, "xxxyyy", "yyyxxx", false);
        assert_eq!(result.scores.len(), 5);
        assert_eq!(cover_total(&result.cover), 6);
        let lcs = result
            .scores
            .iter()
            .find(|(m, _)| *m == Metric::LcsCoverage)
            .unwrap();
        assert!((lcs.1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_pair_ignore_case_folds_cover_inputs() {
        let registry = build_registry(&[Metric::StringCompare], true);
        let result = score_pair(&registry, "MARR", "marr", true);
        assert_eq!(result.scores, vec![(Metric::StringCompare, 1.0)]);
        assert_eq!(result.cover_inputs.0, "marr");
        assert_eq!(cover_total(&result.cover), 4);
    }

    #[test]
    fn test_matched_text_uses_char_offsets() {
        let m = CoverMatch {
            a_start: 8,
            b_start: 0,
            length: 3,
        };
        assert_eq!(matched_text("Beyoncé and Jay", &m), "and");
    }

    #[test]
    fn test_cover_substring_serializes_location() {
        let m = CoverMatch {
            a_start: 0,
            b_start: 3,
            length: 3,
        };
        let substring = CoverSubstring {
            text: "xxx".to_string(),
            location: &m,
        };
        let json = serde_json::to_value(&substring).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "xxx", "a_start": 0, "b_start": 3, "length": 3})
        );
    }
}
