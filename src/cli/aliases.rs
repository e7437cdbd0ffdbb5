//! Aliases command - best-pair similarity between two alias lists.

use clap::Args;

use crate::cli::compare::build_registry;
use crate::cli::OutputFormat;
use crate::core::types::Metric;
use crate::matching::aggregate::list_similarity;
use crate::matching::registry::ComparerRegistry;

#[derive(Args)]
pub struct AliasesArgs {
    /// Alias of the first entity (repeatable)
    #[arg(short, long)]
    pub left: Vec<String>,

    /// Alias of the second entity (repeatable)
    #[arg(short, long)]
    pub right: Vec<String>,

    /// Only report these metrics (repeatable; default: all)
    #[arg(short, long = "metric", value_enum)]
    pub metrics: Vec<Metric>,

    /// Lowercase every alias before scoring
    #[arg(short, long)]
    pub ignore_case: bool,
}

fn score_lists(
    registry: &ComparerRegistry,
    left: &[String],
    right: &[String],
) -> Vec<(Metric, f64)> {
    registry
        .iter()
        .map(|(metric, comparer)| (metric, list_similarity(left, right, comparer)))
        .collect()
}

/// Execute the aliases command
///
/// An empty side scores 0.0 under every metric: no pair exists to compare.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: AliasesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Comparing {} alias(es) against {} alias(es)",
            args.left.len(),
            args.right.len()
        );
    }
    if args.left.is_empty() || args.right.is_empty() {
        tracing::warn!("An alias list is empty; every metric will report 0.0");
    }

    let registry = build_registry(&args.metrics, args.ignore_case);
    let scores = score_lists(&registry, &args.left, &args.right);

    match format {
        OutputFormat::Text => {
            println!("Left:  {}", args.left.join(", "));
            println!("Right: {}", args.right.join(", "));
            println!("\nBest-pair Scores:");
            for (metric, score) in &scores {
                println!("  {metric}: {score:.3}");
            }
        }
        OutputFormat::Json => {
            let scores: serde_json::Map<String, serde_json::Value> = scores
                .iter()
                .map(|(metric, score)| (metric.to_string(), serde_json::json!(score)))
                .collect();
            let output = serde_json::json!({
                "left": args.left,
                "right": args.right,
                "ignore_case": args.ignore_case,
                "scores": scores,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("metric\tscore");
            for (metric, score) in &scores {
                println!("{metric}\t{score:.4}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_score_lists_picks_best_alias() {
        let registry = build_registry(&[Metric::StringCompare], true);
        let scores = score_lists(
            &registry,
            &strings(&["Camellia", "Erasure"]),
            &strings(&["CAMELLIA"]),
        );
        assert_eq!(scores, vec![(Metric::StringCompare, 1.0)]);
    }

    #[test]
    fn test_score_lists_empty_side() {
        let registry = build_registry(&[], false);
        let scores = score_lists(&registry, &[], &strings(&["x"]));
        assert_eq!(scores.len(), 5);
        assert!(scores.iter().all(|(_, s)| s.abs() < f64::EPSILON));
    }
}
