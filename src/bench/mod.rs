//! Benchmark harness comparing every metric over a labeled corpus.
//!
//! - [`fixtures`]: The fixture corpus (embedded or loaded from JSON)
//! - [`harness`]: Runs the comparers and builds a [`BenchReport`]
//!
//! ## Corpus Format
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "pairs": [{"a": "Back and Forth", "b": "Back & Forth"}],
//!   "lists": [{"a": ["Adam Ant"], "b": ["Adam and The Ants"]}]
//! }
//! ```
//!
//! Every fixture is expected to score highly. A metric's ranking is the root
//! mean square of its scores over all fixtures.
//!
//! Two choices make rankings differ from byte-oriented implementations of the
//! same benchmark:
//!
//! - Lengths, windows and substrings count chars, not bytes, so fixtures with
//!   non-ASCII text (accents, kana, hangul) score differently.
//! - An [`EQUALITY_ANOMALY`](crate::EQUALITY_ANOMALY) score counts as 0.0 in
//!   the root mean square instead of being squared into +1.0; anomalies are
//!   tallied per metric instead.

pub mod fixtures;
pub mod harness;

pub use fixtures::FixtureCorpus;
pub use harness::{BenchReport, HarnessConfig};
