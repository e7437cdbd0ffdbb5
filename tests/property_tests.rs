//! Behavioral properties of the similarity library, checked against the
//! embedded fixture corpus and hand-picked inputs.

use simscore::matching::cover::cover_matches;
use simscore::{
    cover_length, list_similarity, wrap_case_insensitive, Comparer, ComparerRegistry,
    FixtureCorpus, Metric, EQUALITY_ANOMALY,
};

fn corpus_strings() -> Vec<String> {
    let corpus = FixtureCorpus::load_embedded().unwrap();
    let mut strings: Vec<String> = corpus
        .pairs
        .iter()
        .flat_map(|p| [p.a.clone(), p.b.clone()])
        .collect();
    strings.extend(
        corpus
            .lists
            .iter()
            .flat_map(|l| l.a.iter().chain(l.b.iter()).cloned()),
    );
    strings
}

#[test]
fn test_cover_of_self_is_full_length() {
    for s in corpus_strings().iter().filter(|s| !s.is_empty()) {
        assert_eq!(cover_length(s, s), s.chars().count(), "input {s:?}");
    }
    assert_eq!(cover_length("ab", "ab"), 2);
    assert_eq!(cover_length("細野晴臣", "細野晴臣"), 4);
}

#[test]
fn test_cover_without_shared_trigram_is_zero() {
    assert_eq!(cover_length("abcdef", "ghijkl"), 0);
    assert_eq!(cover_length("abxcdxef", "abycdyef"), 0);
    assert_eq!(cover_length("ab", "ba"), 0);
    assert_eq!(cover_length("", "abc"), 0);
}

#[test]
fn test_cover_bounded_by_shorter_input() {
    let corpus = FixtureCorpus::load_embedded().unwrap();
    for pair in &corpus.pairs {
        let bound = pair.a.chars().count().min(pair.b.chars().count());
        assert!(
            cover_length(&pair.a, &pair.b) <= bound,
            "{:?} vs {:?}",
            pair.a,
            pair.b
        );
    }
}

#[test]
fn test_cover_matches_are_disjoint() {
    let corpus = FixtureCorpus::load_embedded().unwrap();
    for pair in &corpus.pairs {
        let matches = cover_matches(&pair.a, &pair.b);
        let mut used_a = vec![false; pair.a.chars().count()];
        let mut used_b = vec![false; pair.b.chars().count()];
        for m in &matches {
            for offset in 0..m.length {
                assert!(!used_a[m.a_start + offset], "overlap in {:?}", pair.a);
                assert!(!used_b[m.b_start + offset], "overlap in {:?}", pair.b);
                used_a[m.a_start + offset] = true;
                used_b[m.b_start + offset] = true;
            }
        }
        let lengths: Vec<usize> = matches.iter().map(|m| m.length).collect();
        assert!(
            lengths.windows(2).all(|w| w[0] >= w[1]),
            "matches not extracted longest first: {lengths:?}"
        );
    }
}

#[test]
fn test_cover_known_values() {
    assert_eq!(cover_length("abcabc", "abc"), 3);
    assert_eq!(cover_length("xxxyyy", "yyyxxx"), 6);
}

#[test]
fn test_trigram_short_string_boundary() {
    let registry = ComparerRegistry::standard();
    let trigram = registry.similarity("trigram-overlap").unwrap();
    assert!((trigram.compare("ab", "ab") - 1.0).abs() < f64::EPSILON);
    assert!(trigram.compare("ab", "cd").abs() < f64::EPSILON);
}

#[test]
fn test_case_insensitive_wrapper() {
    let folded = wrap_case_insensitive(Metric::StringCompare);
    assert!((folded.compare("ABC", "abc") - 1.0).abs() < f64::EPSILON);

    let pessimist = wrap_case_insensitive(|_: &str, _: &str| 0.5);
    assert!((pessimist.compare("ABC", "abc") - EQUALITY_ANOMALY).abs() < f64::EPSILON);
    assert!((pessimist.compare("ABC", "abd") - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_case_folded_registry_never_flags_standard_metrics() {
    let registry = ComparerRegistry::case_insensitive();
    for s in corpus_strings() {
        let upper = s.to_uppercase();
        for (metric, comparer) in registry.iter() {
            let score = comparer.compare(&s, &s);
            assert!((score - 1.0).abs() < 1e-9, "{metric} on {s:?}: {score}");
            if upper.to_lowercase() == s.to_lowercase() {
                assert!(comparer.compare(&s, &upper) >= 0.0);
            }
        }
    }
}

#[test]
fn test_list_similarity_boundaries() {
    let none: [&str; 0] = [];
    assert!(list_similarity(&none, &["x"], &Metric::StringCompare).abs() < f64::EPSILON);
    assert!((list_similarity(&["x"], &["x"], &Metric::StringCompare) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_cover_is_idempotent() {
    for s in corpus_strings().iter().take(40) {
        let reversed: String = s.chars().rev().collect();
        assert_eq!(cover_length(s, &reversed), cover_length(s, &reversed));
    }
}

#[test]
fn test_cover_symmetry_on_corpus() {
    let corpus = FixtureCorpus::load_embedded().unwrap();
    for pair in &corpus.pairs {
        assert_eq!(
            cover_length(&pair.a, &pair.b),
            cover_length(&pair.b, &pair.a),
            "{:?} vs {:?}",
            pair.a,
            pair.b
        );
    }
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = ComparerRegistry::case_insensitive();
    let corpus = FixtureCorpus::load_embedded().unwrap();

    let sequential: Vec<f64> = corpus
        .pairs
        .iter()
        .map(|p| registry.get(Metric::LcsCoverage).unwrap().compare(&p.a, &p.b))
        .collect();

    let parallel: Vec<Vec<f64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let lcs = registry.get(Metric::LcsCoverage).unwrap();
                    corpus
                        .pairs
                        .iter()
                        .map(|p| lcs.compare(&p.a, &p.b))
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for scores in parallel {
        assert_eq!(scores, sequential);
    }
}
