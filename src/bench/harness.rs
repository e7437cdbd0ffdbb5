use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::bench::fixtures::FixtureCorpus;
use crate::core::comparer::Comparer;
use crate::core::types::{is_anomaly, Metric};
use crate::matching::aggregate::list_similarity;
use crate::matching::metrics::count_to_f64;
use crate::matching::registry::{ComparerRegistry, RegistryError};

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("No metrics selected")]
    NoMetrics,

    #[error("Fixture corpus is empty")]
    EmptyCorpus,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Configuration for a benchmark run
#[derive(Debug, Clone, Default, Serialize)]
pub struct HarnessConfig {
    /// Compare inputs as given instead of case-folding them
    pub case_sensitive: bool,
    /// Metric that others are measured against; the top-ranked one if unset
    pub reference: Option<Metric>,
    /// Metrics to run; all of them if empty
    pub metrics: Vec<Metric>,
}

impl HarnessConfig {
    /// Registry holding the configured metrics
    #[must_use]
    pub fn registry(&self) -> ComparerRegistry {
        let metrics: &[Metric] = if self.metrics.is_empty() {
            &Metric::ALL
        } else {
            &self.metrics
        };
        ComparerRegistry::with_metrics(metrics, !self.case_sensitive)
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Aggregate result of one metric over the whole corpus
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    /// Root mean square of the fixture scores
    pub score: f64,
    /// Wall-clock time spent scoring every fixture
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Fixtures on which the metric disagreed with folded equality
    pub anomalies: usize,
}

impl std::fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:5.3} {} took {:?}", self.score, self.metric, self.elapsed)
    }
}

/// A fixture on which some metric beat the reference metric
#[derive(Debug, Clone, Serialize)]
pub struct Outscored {
    pub metric: Metric,
    pub a: String,
    pub b: String,
    pub reference: Metric,
    pub score: f64,
    pub reference_score: f64,
}

impl std::fmt::Display for Outscored {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{}) > {}, {:5.3} > {:5.3}",
            self.metric, self.a, self.b, self.reference, self.score, self.reference_score
        )
    }
}

/// Full result of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Number of fixtures scored by each metric
    pub fixtures: usize,
    pub case_folded: bool,
    /// Per-metric results, in registry order
    pub summaries: Vec<MetricSummary>,
    /// Metric the others were measured against, if any scored above zero
    pub reference: Option<Metric>,
    /// Fixtures on which another metric beat the reference
    pub outscored: Vec<Outscored>,
}

impl BenchReport {
    #[must_use]
    pub fn summary(&self, metric: Metric) -> Option<&MetricSummary> {
        self.summaries.iter().find(|s| s.metric == metric)
    }
}

/// Scores of one metric, pair fixtures first, then list fixtures
struct MetricScores {
    metric: Metric,
    scores: Vec<f64>,
}

/// Score every fixture with every registered metric.
///
/// Each metric is ranked by the root mean square of its scores. Anomaly
/// scores count as 0.0 towards the ranking and are tallied separately. The
/// reference metric is `reference` when given, otherwise the first metric
/// with the strictly highest ranking; every other metric that beats it on a
/// fixture is reported.
///
/// # Errors
///
/// Returns `HarnessError::NoMetrics` for an empty registry,
/// `HarnessError::EmptyCorpus` for an empty corpus, and a registry error if
/// `reference` is not registered.
pub fn run(
    corpus: &FixtureCorpus,
    registry: &ComparerRegistry,
    reference: Option<Metric>,
) -> Result<BenchReport, HarnessError> {
    if registry.is_empty() {
        return Err(HarnessError::NoMetrics);
    }
    if corpus.is_empty() {
        return Err(HarnessError::EmptyCorpus);
    }
    if let Some(metric) = reference {
        registry.get(metric)?;
    }

    let mut all_scores = Vec::with_capacity(registry.len());
    let mut summaries = Vec::with_capacity(registry.len());

    for (metric, comparer) in registry.iter() {
        let start = Instant::now();
        let scores = score_corpus(corpus, comparer);
        let elapsed = start.elapsed();

        let anomalies = scores.iter().filter(|s| is_anomaly(**s)).count();
        let score = root_mean_square(&scores);
        tracing::debug!(%metric, score, ?elapsed, anomalies, "Scored fixture corpus");
        if anomalies > 0 {
            tracing::warn!(
                %metric,
                anomalies,
                "Metric scored identical strings below 1.0"
            );
        }

        summaries.push(MetricSummary {
            metric,
            score,
            elapsed,
            anomalies,
        });
        all_scores.push(MetricScores { metric, scores });
    }

    let reference = reference.or_else(|| top_ranked(&summaries));
    let outscored = match reference {
        Some(reference) => find_outscored(corpus, &all_scores, reference),
        None => Vec::new(),
    };

    Ok(BenchReport {
        fixtures: corpus.len(),
        case_folded: registry.is_case_folded(),
        summaries,
        reference,
        outscored,
    })
}

fn score_corpus(corpus: &FixtureCorpus, comparer: &dyn Comparer) -> Vec<f64> {
    let pairs = corpus.pairs.iter().map(|p| comparer.compare(&p.a, &p.b));
    let lists = corpus
        .lists
        .iter()
        .map(|l| list_similarity(&l.a, &l.b, comparer));
    pairs.chain(lists).collect()
}

/// `sqrt(sum(s^2)) / sqrt(n)`, with anomaly scores counted as zero
fn root_mean_square(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = scores
        .iter()
        .filter(|s| !is_anomaly(**s))
        .map(|s| s * s)
        .sum();
    sum_of_squares.sqrt() / count_to_f64(scores.len()).sqrt()
}

/// First metric with the strictly highest score; None if nothing beats 0.0
fn top_ranked(summaries: &[MetricSummary]) -> Option<Metric> {
    let mut best: Option<&MetricSummary> = None;
    for summary in summaries {
        let current = best.map_or(0.0, |b| b.score);
        if summary.score > current {
            best = Some(summary);
        }
    }
    best.map(|b| b.metric)
}

fn find_outscored(
    corpus: &FixtureCorpus,
    all_scores: &[MetricScores],
    reference: Metric,
) -> Vec<Outscored> {
    let Some(reference_scores) = all_scores.iter().find(|s| s.metric == reference) else {
        return Vec::new();
    };

    let labels: Vec<(String, String)> = corpus
        .pairs
        .iter()
        .map(|p| (p.a.clone(), p.b.clone()))
        .chain(corpus.lists.iter().map(|l| (l.a_label(), l.b_label())))
        .collect();

    let mut outscored = Vec::new();
    for (i, (a, b)) in labels.iter().enumerate() {
        let reference_score = reference_scores.scores[i];
        for other in all_scores.iter().filter(|s| s.metric != reference) {
            let score = other.scores[i];
            if score > reference_score {
                outscored.push(Outscored {
                    metric: other.metric,
                    a: a.clone(),
                    b: b.clone(),
                    reference,
                    score,
                    reference_score,
                });
            }
        }
    }
    outscored
}
