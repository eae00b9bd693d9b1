//! Diff result type — the structured output of a document comparison.
//!
//! Serialized field names are camelCase so the JSON matches what the
//! presentation layer consumes (`similarityPercent`, `tokensA`, ...).

use serde::{Deserialize, Serialize};

use ledo_core::AnnotatedToken;

use crate::classify::Classification;

// ---------------------------------------------------------------------------
// DiffResult
// ---------------------------------------------------------------------------

/// The top-level output of a single comparison.
///
/// Sample lists are capped for display; the counts are always full totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    /// Unique-word Jaccard similarity, 0..=100.
    pub similarity_percent: u8,
    pub tokens_a: Vec<AnnotatedToken>,
    pub tokens_b: Vec<AnnotatedToken>,
    pub added_sample: Vec<String>,
    pub removed_sample: Vec<String>,
    pub modified_sample: Vec<String>,
    pub added_count: usize,
    pub removed_count: usize,
    pub modified_count: usize,
    /// Short human-readable bullets built from the full counts.
    pub summary: Vec<String>,
}

impl DiffResult {
    /// Assemble a result from a similarity score and a token classification.
    pub fn new(similarity_percent: u8, classification: Classification) -> Self {
        let summary = summary_lines(
            classification.added_count,
            classification.removed_count,
            classification.modified_count,
        );
        Self {
            similarity_percent,
            tokens_a: classification.left,
            tokens_b: classification.right,
            added_sample: classification.added_sample,
            removed_sample: classification.removed_sample,
            modified_sample: classification.modified_sample,
            added_count: classification.added_count,
            removed_count: classification.removed_count,
            modified_count: classification.modified_count,
            summary,
        }
    }

    /// `true` when no token was added, removed or relocated.
    pub fn is_unchanged(&self) -> bool {
        self.added_count == 0 && self.removed_count == 0 && self.modified_count == 0
    }
}

/// The three summary bullets shown next to the visual diff.
pub fn summary_lines(added: usize, removed: usize, modified: usize) -> Vec<String> {
    vec![
        format!("{} additions detected", added),
        format!("{} removals detected", removed),
        format!("{} potential modifications", modified),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
