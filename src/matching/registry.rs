use thiserror::Error;

use crate::core::comparer::Comparer;
use crate::core::types::Metric;
use crate::matching::case_fold::wrap_case_insensitive;
use crate::matching::metrics;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("Metric '{0}' is not part of this registry")]
    NotRegistered(Metric),
}

impl Metric {
    /// Scoring function behind the metric
    #[must_use]
    pub fn scorer(self) -> fn(&str, &str) -> f64 {
        match self {
            Self::StringCompare => metrics::string_compare,
            Self::LevenshteinSimilarity => metrics::levenshtein_similarity,
            Self::JaroWinkler => metrics::jaro_winkler,
            Self::TrigramOverlap => metrics::trigram_overlap,
            Self::LcsCoverage => metrics::lcs_coverage,
        }
    }
}

impl Comparer for Metric {
    fn compare(&self, a: &str, b: &str) -> f64 {
        (self.scorer())(a, b)
    }
}

struct Entry {
    metric: Metric,
    comparer: Box<dyn Comparer>,
}

/// Immutable lookup table of named comparers.
///
/// Built once and passed by reference; iteration follows [`Metric::ALL`]
/// order.
pub struct ComparerRegistry {
    entries: Vec<Entry>,
    case_folded: bool,
}

impl ComparerRegistry {
    /// All metrics, comparing inputs as given
    #[must_use]
    pub fn standard() -> Self {
        Self::with_metrics(&Metric::ALL, false)
    }

    /// All metrics, each wrapped to ignore case
    #[must_use]
    pub fn case_insensitive() -> Self {
        Self::with_metrics(&Metric::ALL, true)
    }

    /// A registry holding only `metrics`, in [`Metric::ALL`] order
    #[must_use]
    pub fn with_metrics(metrics: &[Metric], case_folded: bool) -> Self {
        let entries = Metric::ALL
            .into_iter()
            .filter(|m| metrics.contains(m))
            .map(|metric| {
                let comparer: Box<dyn Comparer> = if case_folded {
                    Box::new(wrap_case_insensitive(metric))
                } else {
                    Box::new(metric)
                };
                Entry { metric, comparer }
            })
            .collect();

        Self {
            entries,
            case_folded,
        }
    }

    /// Look up a comparer by its registry name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownMetric` if no metric has that name, or
    /// `RegistryError::NotRegistered` if the metric was left out of this
    /// registry.
    pub fn similarity(&self, name: &str) -> Result<&dyn Comparer, RegistryError> {
        let metric: Metric = name.parse()?;
        self.get(metric)
    }

    /// Comparer for `metric`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRegistered` if the metric was left out of
    /// this registry.
    pub fn get(&self, metric: Metric) -> Result<&dyn Comparer, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.metric == metric)
            .map(|e| e.comparer.as_ref())
            .ok_or(RegistryError::NotRegistered(metric))
    }

    /// Registered metrics with their comparers
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &dyn Comparer)> {
        self.entries.iter().map(|e| (e.metric, e.comparer.as_ref()))
    }

    #[must_use]
    pub fn metrics(&self) -> Vec<Metric> {
        self.entries.iter().map(|e| e.metric).collect()
    }

    #[must_use]
    pub fn is_case_folded(&self) -> bool {
        self.case_folded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ComparerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparerRegistry")
            .field("metrics", &self.metrics())
            .field("case_folded", &self.case_folded)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let registry = ComparerRegistry::standard();
        let trigram = registry.similarity("trigram-overlap").unwrap();
        assert!((trigram.compare("ab", "ab") - 1.0).abs() < f64::EPSILON);
        assert!(trigram.compare("ab", "cd").abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_name() {
        let registry = ComparerRegistry::standard();
        assert_eq!(
            registry.similarity("levenshein").err(),
            Some(RegistryError::UnknownMetric("levenshein".to_string()))
        );
    }

    #[test]
    fn test_subset_registry() {
        let registry =
            ComparerRegistry::with_metrics(&[Metric::LcsCoverage, Metric::StringCompare], false);
        // Declaration order, not argument order
        assert_eq!(
            registry.metrics(),
            vec![Metric::StringCompare, Metric::LcsCoverage]
        );
        assert_eq!(
            registry.get(Metric::JaroWinkler).err(),
            Some(RegistryError::NotRegistered(Metric::JaroWinkler))
        );
    }

    #[test]
    fn test_case_insensitive_registry() {
        let raw = ComparerRegistry::standard();
        let folded = ComparerRegistry::case_insensitive();
        assert!(!raw.is_case_folded());
        assert!(folded.is_case_folded());

        let raw_cmp = raw.get(Metric::StringCompare).unwrap();
        let folded_cmp = folded.get(Metric::StringCompare).unwrap();
        assert!(raw_cmp.compare("MARR", "marr").abs() < f64::EPSILON);
        assert!((folded_cmp.compare("MARR", "marr") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_iteration_order() {
        let registry = ComparerRegistry::case_insensitive();
        let names: Vec<&str> = registry.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(
            names,
            vec![
                "string-compare",
                "levenshtein-similarity",
                "jaro-winkler",
                "trigram-overlap",
                "lcs-coverage"
            ]
        );
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }
}
