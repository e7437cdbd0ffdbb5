//! Similarity metrics and the comparers built on them.
//!
//! This module provides the scoring functionality:
//!
//! - [`cover`]: Disjoint longest-common-substring coverage (`cover_length`)
//! - [`metrics`]: The pairwise scoring formulas
//! - [`registry`]: [`ComparerRegistry`], lookup of comparers by metric name
//! - [`case_fold`]: Case-insensitive wrapper with the equality anomaly check
//! - [`aggregate`]: Best-pair similarity over two alias lists
//!
//! ## Metrics
//!
//! | Name | Score |
//! |------|-------|
//! | `string-compare` | 1.0 if equal, else 0.0 |
//! | `levenshtein-similarity` | `1 - edits / (len(a) + len(b))`, substitutions cost 2 |
//! | `jaro-winkler` | Jaro with a prefix boost above 0.7, prefix capped at 4 |
//! | `trigram-overlap` | shared 3-char windows over the union of windows |
//! | `lcs-coverage` | `cover / (len(a) + len(b) - cover)` |
//!
//! All lengths count chars, not bytes.
//!
//! ## Example
//!
//! ```rust
//! use simscore::matching::aggregate::list_similarity;
//! use simscore::matching::registry::ComparerRegistry;
//! use simscore::Comparer;
//!
//! let registry = ComparerRegistry::case_insensitive();
//! let lcs = registry.similarity("lcs-coverage").unwrap();
//!
//! let score = lcs.compare("Back and Forth", "Back & Forth");
//! assert!(score > 0.5);
//!
//! let best = list_similarity(&["Yorushika (ヨルシカ)"], &["Yorushika"], lcs);
//! assert!(best > 0.5);
//! ```

pub mod aggregate;
pub mod case_fold;
pub mod cover;
pub mod metrics;
pub mod registry;

pub use registry::ComparerRegistry;
