use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixtures: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse fixtures: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Fixture corpus contains no pairs and no alias lists")]
    Empty,
}

/// Corpus version for compatibility checking
pub const CORPUS_VERSION: &str = "1.0.0";

/// Two strings that should score as near-duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairFixture {
    pub a: String,
    pub b: String,
}

impl PairFixture {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// Two alias lists that should refer to the same entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFixture {
    pub a: Vec<String>,
    pub b: Vec<String>,
}

impl ListFixture {
    pub fn new<S: Into<String>>(
        a: impl IntoIterator<Item = S>,
        b: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            a: a.into_iter().map(Into::into).collect(),
            b: b.into_iter().map(Into::into).collect(),
        }
    }

    /// Comma-joined aliases of side `a`, for reports
    #[must_use]
    pub fn a_label(&self) -> String {
        self.a.join(",")
    }

    /// Comma-joined aliases of side `b`, for reports
    #[must_use]
    pub fn b_label(&self) -> String {
        self.b.join(",")
    }
}

/// Hand-labeled "should be considered equal" fixtures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCorpus {
    pub version: String,
    #[serde(default)]
    pub pairs: Vec<PairFixture>,
    #[serde(default)]
    pub lists: Vec<ListFixture>,
}

impl FixtureCorpus {
    /// Build a corpus in memory
    #[must_use]
    pub fn new(pairs: Vec<PairFixture>, lists: Vec<ListFixture>) -> Self {
        Self {
            version: CORPUS_VERSION.to_string(),
            pairs,
            lists,
        }
    }

    /// Load the embedded default corpus of release titles and artist aliases
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON cannot be parsed.
    pub fn load_embedded() -> Result<Self, FixtureError> {
        // Checked at compile time by build.rs
        const EMBEDDED_CORPUS: &str = include_str!("../../fixtures/corpus.json");
        Self::from_json(EMBEDDED_CORPUS)
    }

    /// Load a corpus from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::ReadError` if the file cannot be read, or a
    /// parse error if its content is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a corpus from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::ParseError` for malformed JSON and
    /// `FixtureError::Empty` if the corpus holds no fixtures.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let corpus: Self = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if corpus.version != CORPUS_VERSION {
            tracing::warn!(
                expected = CORPUS_VERSION,
                found = %corpus.version,
                "Fixture corpus version mismatch"
            );
        }

        if corpus.is_empty() {
            return Err(FixtureError::Empty);
        }

        tracing::debug!(
            pairs = corpus.pairs.len(),
            lists = corpus.lists.len(),
            "Loaded fixture corpus"
        );
        Ok(corpus)
    }

    /// Total number of fixtures
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len() + self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
