use crate::core::comparer::Comparer;

/// Best score of `comparer` over every pairing of two alias lists.
///
/// Returns 0.0 when either list is empty. That is the starting value of the
/// running maximum, not evidence that the entities differ. Negative anomaly
/// scores never beat it. Which pair produced the maximum is not reported.
pub fn list_similarity<A, B, C>(aliases_a: &[A], aliases_b: &[B], comparer: &C) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
    C: Comparer + ?Sized,
{
    let mut best = 0.0;
    for a in aliases_a {
        for b in aliases_b {
            let score = comparer.compare(a.as_ref(), b.as_ref());
            if score > best {
                best = score;
            }
        }
    }
    best
}
