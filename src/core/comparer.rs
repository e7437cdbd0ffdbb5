/// A pairwise similarity function.
///
/// Scores are nominally in [0, 1], 1 meaning identical under the comparer's
/// notion of similarity. Negative scores are anomaly markers (see
/// [`crate::matching::case_fold`]) and must not be read as magnitudes.
///
/// Comparers hold no mutable state and may be shared across threads.
pub trait Comparer: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> f64;
}

impl<F> Comparer for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}
