//! # simscore
//!
//! A library for scoring how similar two free-text strings, or two lists of
//! alias strings, are.
//!
//! Metadata records for the same release or artist often differ by
//! punctuation, word order, transliteration or partial rewording
//! ("Back and Forth" vs "Back & Forth", "Haruomi Hosono (細野晴臣)" vs
//! "Haruomi Hosono"). `simscore` offers several interchangeable metrics for
//! deciding whether two such records are near-duplicates, and a harness that
//! ranks the metrics over a hand-labeled corpus.
//!
//! ## Features
//!
//! - **Substring coverage**: Greedy disjoint longest common substrings, found
//!   with an incrementally shrinking alignment table
//! - **Classic metrics**: Exact comparison, weighted edit distance,
//!   Jaro-Winkler and trigram overlap
//! - **Case folding**: Wrap any comparer to ignore case, with a check that it
//!   scores identical strings as 1.0
//! - **Alias lists**: Best-pair similarity between two entities' aliases
//! - **Benchmarking**: Rank every metric over a fixture corpus and list the
//!   fixtures where the ranking disagrees
//!
//! ## Example
//!
//! ```rust
//! use simscore::{
//!     cover_length, list_similarity, wrap_case_insensitive, Comparer, ComparerRegistry, Metric,
//! };
//!
//! assert_eq!(cover_length("xxxyyy", "yyyxxx"), 6);
//!
//! let registry = ComparerRegistry::standard();
//! let lcs = registry.similarity("lcs-coverage").unwrap();
//! assert!(lcs.compare("Mystic Warrior", "Mystic Warrior EP") > 0.8);
//!
//! let folded = wrap_case_insensitive(Metric::StringCompare);
//! assert_eq!(folded.compare("ABC", "abc"), 1.0);
//!
//! let best = list_similarity(&["Tarja"], &["Tarja Turunen", "Tarja"], &folded);
//! assert_eq!(best, 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: The `Comparer` trait and metric names
//! - [`matching`]: Substring coverage, the metrics, case folding and list
//!   aggregation
//! - [`bench`]: Fixture corpus and benchmark harness
//! - [`cli`]: Command-line interface implementation

pub mod bench;
pub mod cli;
pub mod core;
pub mod matching;

// Re-export commonly used types for convenience
pub use bench::fixtures::FixtureCorpus;
pub use core::comparer::Comparer;
pub use core::types::Metric;
pub use matching::aggregate::list_similarity;
pub use matching::case_fold::{wrap_case_insensitive, CaseFolded, EQUALITY_ANOMALY};
pub use matching::cover::{cover_length, SubstringCover, MIN_SUBSTRING_LEN};
pub use matching::registry::{ComparerRegistry, RegistryError};
