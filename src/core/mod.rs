//! Core types shared by the metrics, the harness and the CLI.
//!
//! - [`Comparer`]: A pairwise similarity function
//! - [`Metric`]: The named metrics known to the registry

pub mod comparer;
pub mod types;

pub use comparer::Comparer;
pub use types::Metric;
