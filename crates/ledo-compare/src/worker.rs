//! Compare engine: tokenizes two texts, scores them and classifies tokens.
//!
//! [`CompareEngine`] is the primary entry point. A single comparison runs
//! synchronously on the calling thread; [`CompareEngine::compare_batch`]
//! fans independent pairs out across rayon workers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ledo_core::Result;

use crate::classify::classify;
use crate::result::DiffResult;
use crate::similarity::similarity;
use crate::tokenize::tokenize;

/// Maximum positional distance at which a shared token still counts as
/// unchanged.
pub const DEFAULT_MOVE_THRESHOLD: usize = 5;

/// Number of token texts kept in each summary sample list.
pub const DEFAULT_SAMPLE_LIMIT: usize = 6;

// ---------------------------------------------------------------------------
// CompareConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for the compare engine.
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// A token whose nearest same-text occurrence on the other side is more
    /// than this many positions away is `Modified`.
    /// Default: 5.
    pub move_threshold: usize,
    /// Cap on each of the added / removed / modified sample lists.
    /// Default: 6.
    pub sample_limit: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl CompareConfig {
    /// Parse a configuration from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ---------------------------------------------------------------------------
// CompareEngine
// ---------------------------------------------------------------------------

/// Stateless compare engine; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct CompareEngine {
    config: CompareConfig,
}

impl CompareEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two raw texts and produce a [`DiffResult`].
    ///
    /// # Steps
    /// 1. Tokenize both texts.
    /// 2. Score unique-word similarity on the raw texts.
    /// 3. Classify every token of both sequences.
    pub fn compare(&self, text_a: &str, text_b: &str) -> DiffResult {
        let tokens_a = tokenize(text_a);
        let tokens_b = tokenize(text_b);

        let similarity_percent = similarity(text_a, text_b);
        let classification = classify(&tokens_a, &tokens_b, &self.config);

        debug!(
            tokens_a = tokens_a.len(),
            tokens_b = tokens_b.len(),
            similarity_percent,
            added = classification.added_count,
            removed = classification.removed_count,
            modified = classification.modified_count,
            "compared documents"
        );

        DiffResult::new(similarity_percent, classification)
    }

    /// Compare many independent pairs in parallel.
    ///
    /// The output has one result per input pair, in input order.
    pub fn compare_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<DiffResult>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        debug!(pairs = pairs.len(), "starting batch comparison");
        pairs
            .par_iter()
            .map(|(a, b)| self.compare(a.as_ref(), b.as_ref()))
            .collect()
    }
}

/// Compare two raw texts with the default configuration.
pub fn compare_documents(text_a: &str, text_b: &str) -> DiffResult {
    CompareEngine::default().compare(text_a, text_b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
