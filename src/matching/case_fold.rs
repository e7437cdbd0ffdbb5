//! Case-insensitive comparers.
//!
//! [`wrap_case_insensitive`] lowercases both inputs one code point at a time
//! (no locale rules) before delegating to the inner comparer. If the folded
//! inputs are identical but the inner comparer still scores them below 1.0,
//! the wrapper returns [`EQUALITY_ANOMALY`] instead of the raw score.

use crate::core::comparer::Comparer;

/// Returned when a comparer scores two identical folded strings below 1.0.
///
/// Never a similarity value: callers treat any negative score as an anomaly
/// marker.
pub const EQUALITY_ANOMALY: f64 = -1.0;

/// Lowercase `s` with the simple per-code-point mapping.
#[must_use]
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// A comparer that sees case-folded inputs.
#[derive(Debug, Clone, Copy)]
pub struct CaseFolded<C> {
    inner: C,
}

impl<C: Comparer> CaseFolded<C> {
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Comparer> Comparer for CaseFolded<C> {
    fn compare(&self, a: &str, b: &str) -> f64 {
        let a = fold_case(a);
        let b = fold_case(b);
        let score = self.inner.compare(&a, &b);
        if a == b && score < 1.0 {
            tracing::debug!(a = %a, score, "comparer disagrees with folded equality");
            return EQUALITY_ANOMALY;
        }
        score
    }
}

/// Make `comparer` case-insensitive.
#[must_use]
pub fn wrap_case_insensitive<C: Comparer>(comparer: C) -> CaseFolded<C> {
    CaseFolded::new(comparer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Metric;
    use crate::matching::metrics::string_compare;

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("MARR"), "marr");
        assert_eq!(fold_case("KÁRYYN"), "káryyn");
        assert_eq!(fold_case("Кедр"), "кедр");
        assert_eq!(fold_case("already lower"), "already lower");
    }

    #[test]
    fn test_wrapped_string_compare_ignores_case() {
        let cmp = wrap_case_insensitive(string_compare);
        assert!((cmp.compare("ABC", "abc") - 1.0).abs() < f64::EPSILON);
        assert!(cmp.compare("ABC", "abd").abs() < f64::EPSILON);
    }

    #[test]
    fn test_disagreeing_comparer_yields_sentinel() {
        let grumpy = |_: &str, _: &str| 0.25;
        let cmp = wrap_case_insensitive(grumpy);
        assert!((cmp.compare("Mekons", "MEKONS") - EQUALITY_ANOMALY).abs() < f64::EPSILON);
        // Unequal folded inputs pass the raw score through
        assert!((cmp.compare("Mekons", "The Mekons") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wrapped_metrics_agree_with_equality() {
        for metric in Metric::ALL {
            let cmp = wrap_case_insensitive(metric);
            let score = cmp.compare("Tomeka Reid Quartet", "TOMEKA REID QUARTET");
            assert!((score - 1.0).abs() < 1e-9, "{metric} scored {score}");
        }
    }

    #[test]
    fn test_short_equal_strings_score_one_for_every_metric() {
        for metric in Metric::ALL {
            let score = wrap_case_insensitive(metric).compare("AB", "ab");
            assert!((score - 1.0).abs() < 1e-9, "{metric} scored {score}");
        }
    }
}
