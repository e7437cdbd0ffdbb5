use serde::{Deserialize, Serialize};

use crate::matching::registry::RegistryError;

/// A named pairwise similarity metric
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Exact equality
    StringCompare,
    /// Edit distance relative to combined length
    LevenshteinSimilarity,
    /// Jaro similarity with a Winkler prefix boost
    JaroWinkler,
    /// Shared three-char windows
    TrigramOverlap,
    /// Disjoint longest-common-substring coverage
    LcsCoverage,
}

impl Metric {
    /// Every metric, in registry order
    pub const ALL: [Metric; 5] = [
        Metric::StringCompare,
        Metric::LevenshteinSimilarity,
        Metric::JaroWinkler,
        Metric::TrigramOverlap,
        Metric::LcsCoverage,
    ];

    /// Registry name of the metric
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StringCompare => "string-compare",
            Self::LevenshteinSimilarity => "levenshtein-similarity",
            Self::JaroWinkler => "jaro-winkler",
            Self::TrigramOverlap => "trigram-overlap",
            Self::LcsCoverage => "lcs-coverage",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Metric {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RegistryError::UnknownMetric(s.to_string()))
    }
}

/// True for scores that flag a metric disagreeing with trivial equality
/// rather than measuring similarity.
#[must_use]
pub fn is_anomaly(score: f64) -> bool {
    score < 0.0
}
