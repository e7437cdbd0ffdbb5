use std::collections::HashMap;

use crate::matching::cover::cover_length;

/// Jaro similarity above which the Winkler prefix boost is applied
pub const JARO_WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Longest common prefix rewarded by the Winkler boost
pub const JARO_WINKLER_PREFIX_LEN: usize = 4;

/// Window length for trigram overlap
const TRIGRAM_LEN: usize = 3;

/// Convert a character count to f64 for ratio calculations
///
/// Counts here are string lengths, far below the 2^53 limit of f64 mantissa
/// precision.
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// 1.0 if the strings are identical, else 0.0
#[must_use]
pub fn string_compare(a: &str, b: &str) -> f64 {
    if a == b {
        1.0
    } else {
        0.0
    }
}

/// Wagner–Fischer edit distance with per-operation costs.
///
/// Operates on chars and keeps two rows of the DP matrix.
#[must_use]
pub fn wagner_fischer(
    a: &[char],
    b: &[char],
    insert_cost: usize,
    delete_cost: usize,
    substitute_cost: usize,
) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).map(|j| j * insert_cost).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = (i + 1) * delete_cost;
        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb {
                prev[j]
            } else {
                prev[j] + substitute_cost
            };
            let insertion = curr[j] + insert_cost;
            let deletion = prev[j + 1] + delete_cost;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit-distance similarity: `1 - distance / (len(a) + len(b))`.
///
/// Insertions and deletions cost 1 and substitutions cost 2, so the distance
/// is bounded by the combined length and the score stays in [0, 1]. Two
/// empty strings score 1.0.
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let distance = wagner_fischer(&a, &b, 1, 1, 2);
    1.0 - count_to_f64(distance) / count_to_f64(total)
}

/// Jaro-Winkler similarity.
///
/// The Jaro score comes from `strsim`. The Winkler prefix boost is only
/// applied once the Jaro score exceeds [`JARO_WINKLER_BOOST_THRESHOLD`], and
/// rewards at most [`JARO_WINKLER_PREFIX_LEN`] leading chars.
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let jaro = strsim::jaro(a, b);
    if jaro <= JARO_WINKLER_BOOST_THRESHOLD {
        return jaro;
    }

    let prefix = a
        .chars()
        .zip(b.chars())
        .take(JARO_WINKLER_PREFIX_LEN)
        .take_while(|(ca, cb)| ca == cb)
        .count();

    jaro + 0.1 * count_to_f64(prefix) * (1.0 - jaro)
}

/// Share of overlapping three-char windows the strings have in common.
///
/// Each window of `b` is matched against a multiset of `a`'s windows and
/// consumes one occurrence. The score is `matched / (windows(a) + windows(b) -
/// matched)`. Strings shorter than three chars fall back to exact equality.
#[must_use]
pub fn trigram_overlap(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() < TRIGRAM_LEN || b.len() < TRIGRAM_LEN {
        return if a == b { 1.0 } else { 0.0 };
    }

    let mut available: HashMap<&[char], usize> = HashMap::new();
    for window in a.windows(TRIGRAM_LEN) {
        *available.entry(window).or_default() += 1;
    }

    let mut matched = 0usize;
    for window in b.windows(TRIGRAM_LEN) {
        if let Some(count) = available.get_mut(window) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }

    let windows = (a.len() - 2) + (b.len() - 2);
    let denominator = windows - matched;
    if denominator == 0 {
        return 1.0;
    }
    count_to_f64(matched) / count_to_f64(denominator)
}

/// Disjoint common substring coverage relative to the combined length:
/// `cover / (len(a) + len(b) - cover)`.
///
/// Two empty strings score 1.0.
#[must_use]
pub fn lcs_coverage(a: &str, b: &str) -> f64 {
    let cover = cover_length(a, b);
    let denominator = a.chars().count() + b.chars().count() - cover;
    if denominator == 0 {
        return 1.0;
    }
    count_to_f64(cover) / count_to_f64(denominator)
}
