//! Position-aware token classification.
//!
//! Every token of both sequences is looked up, by exact text, in the other
//! sequence:
//!
//! - Text absent from the other side → `Removed` (left) or `Added` (right).
//! - Text present, nearest occurrence more than `move_threshold` positions
//!   away → `Modified`.
//! - Otherwise → `Unchanged`.
//!
//! Duplicates matter here: positions are per occurrence, unlike the word sets
//! used for similarity scoring.

use std::collections::HashMap;

use ledo_core::{AnnotatedToken, Token, TokenStatus};

use crate::worker::CompareConfig;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Both annotated sequences plus the bounded samples and full counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub left: Vec<AnnotatedToken>,
    pub right: Vec<AnnotatedToken>,
    /// First `sample_limit` right-only token texts, in right order.
    pub added_sample: Vec<String>,
    /// First `sample_limit` left-only token texts, in left order.
    pub removed_sample: Vec<String>,
    /// First `sample_limit` relocated left token texts, in left order.
    pub modified_sample: Vec<String>,
    pub added_count: usize,
    pub removed_count: usize,
    /// Relocated tokens counted on the left side.
    pub modified_count: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify each token of `left` and `right` against the other sequence.
pub fn classify(left: &[Token], right: &[Token], config: &CompareConfig) -> Classification {
    let left_index = position_index(left);
    let right_index = position_index(right);

    let left = annotate(left, &right_index, TokenStatus::Removed, config.move_threshold);
    let right = annotate(right, &left_index, TokenStatus::Added, config.move_threshold);

    let (removed_sample, removed_count) = sample(&left, TokenStatus::Removed, config.sample_limit);
    let (modified_sample, modified_count) =
        sample(&left, TokenStatus::Modified, config.sample_limit);
    let (added_sample, added_count) = sample(&right, TokenStatus::Added, config.sample_limit);

    Classification {
        left,
        right,
        added_sample,
        removed_sample,
        modified_sample,
        added_count,
        removed_count,
        modified_count,
    }
}

/// Map each distinct token text to its positions in `tokens`, ascending.
pub fn position_index(tokens: &[Token]) -> HashMap<&str, Vec<usize>> {
    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        index.entry(token.text.as_str()).or_default().push(i);
    }
    index
}

/// Smallest `|i - p|` over `positions`, which must be sorted ascending.
///
/// Returns `None` when `positions` is empty.
pub fn nearest_distance(positions: &[usize], i: usize) -> Option<usize> {
    let split = positions.partition_point(|&p| p < i);
    let after = positions.get(split).map(|&p| p - i);
    let before = split.checked_sub(1).map(|k| i - positions[k]);
    match (before, after) {
        (Some(b), Some(a)) => Some(b.min(a)),
        (b, a) => b.or(a),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn annotate(
    own: &[Token],
    other_index: &HashMap<&str, Vec<usize>>,
    absent: TokenStatus,
    move_threshold: usize,
) -> Vec<AnnotatedToken> {
    own.iter()
        .enumerate()
        .map(|(i, token)| {
            let status = match other_index
                .get(token.text.as_str())
                .and_then(|positions| nearest_distance(positions, i))
            {
                None => absent,
                Some(distance) if distance > move_threshold => TokenStatus::Modified,
                Some(_) => TokenStatus::Unchanged,
            };
            AnnotatedToken::new(token.text.as_str(), status)
        })
        .collect()
}

/// Collect the first `limit` texts with `status` and the total number of them.
fn sample(tokens: &[AnnotatedToken], status: TokenStatus, limit: usize) -> (Vec<String>, usize) {
    let mut texts = Vec::new();
    let mut count = 0;
    for token in tokens.iter().filter(|t| t.status == status) {
        if texts.len() < limit {
            texts.push(token.text.clone());
        }
        count += 1;
    }
    (texts, count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn statuses(tokens: &[AnnotatedToken]) -> Vec<TokenStatus> {
        tokens.iter().map(|t| t.status).collect()
    }

    fn run(left: &str, right: &str) -> Classification {
        classify(&tokenize(left), &tokenize(right), &CompareConfig::default())
    }

    #[test]
    fn nearest_distance_picks_closest_side() {
        let positions = [2, 9, 20];
        assert_eq!(nearest_distance(&positions, 0), Some(2));
        assert_eq!(nearest_distance(&positions, 9), Some(0));
        assert_eq!(nearest_distance(&positions, 12), Some(3));
        assert_eq!(nearest_distance(&positions, 16), Some(4));
        assert_eq!(nearest_distance(&positions, 40), Some(20));
        assert_eq!(nearest_distance(&[], 3), None);
    }

    #[test]
    fn nearest_distance_matches_exhaustive_minimum() {
        let positions: [usize; 7] = [0, 3, 4, 11, 17, 18, 30];
        for i in 0..40 {
            let brute = positions.iter().map(|&p| p.abs_diff(i)).min();
            assert_eq!(nearest_distance(&positions, i), brute, "i = {}", i);
        }
    }

    #[test]
    fn position_index_keeps_ascending_order() {
        let tokens = tokenize("a b a c a");
        let index = position_index(&tokens);
        assert_eq!(index["a"], vec![0, 4, 8]);
        assert_eq!(index[" "], vec![1, 3, 5, 7]);
        assert_eq!(index["c"], vec![6]);
    }

    #[test]
    fn identical_sequences_are_unchanged() {
        let c = run("the borrower shall repay", "the borrower shall repay");
        assert!(c.left.iter().all(|t| t.status == TokenStatus::Unchanged));
        assert!(c.right.iter().all(|t| t.status == TokenStatus::Unchanged));
        assert_eq!((c.added_count, c.removed_count, c.modified_count), (0, 0, 0));
    }

    #[test]
    fn appended_word_is_added() {
        let c = run("The quick fox", "The quick fox jumps");
        assert_eq!(c.right.last().map(|t| t.text.as_str()), Some("jumps"));
        assert_eq!(c.right.last().map(|t| t.status), Some(TokenStatus::Added));
        assert_eq!(c.added_count, 1);
        assert_eq!(c.added_sample, vec!["jumps"]);
        assert_eq!(c.removed_count, 0);
    }

    #[test]
    fn dropped_word_is_removed() {
        let c = run("pay the fee promptly", "pay the fee");
        assert_eq!(
            statuses(&c.left),
            vec![
                TokenStatus::Unchanged,
                TokenStatus::Unchanged,
                TokenStatus::Unchanged,
                TokenStatus::Unchanged,
                TokenStatus::Unchanged,
                TokenStatus::Unchanged,
                TokenStatus::Removed,
            ]
        );
        assert_eq!(c.removed_sample, vec!["promptly"]);
    }

    #[test]
    fn far_move_is_modified_on_both_sides() {
        // "x" sits at 0 on the left and at 12 on the right.
        let c = run("x a b c d e f", "a b c d e f x");
        assert_eq!(c.left[0].text, "x");
        assert_eq!(c.left[0].status, TokenStatus::Modified);
        assert_eq!(c.right[12].text, "x");
        assert_eq!(c.right[12].status, TokenStatus::Modified);
        assert_eq!(c.modified_sample, vec!["x"]);
        assert_eq!(c.modified_count, 1);
        assert_eq!(c.added_count, 0);
        assert_eq!(c.removed_count, 0);
    }

    #[test]
    fn short_move_is_unchanged() {
        // "x" shifts from 2 to 0.
        let c = run("a x b", "x a b");
        assert!(c.left.iter().all(|t| t.status == TokenStatus::Unchanged));
        assert!(c.right.iter().all(|t| t.status == TokenStatus::Unchanged));
    }

    #[test]
    fn threshold_boundary_is_exclusive() {
        // "z" moves exactly 6 positions (modified) versus exactly 4 (unchanged).
        let six = run("z a b c", "a b c z");
        assert_eq!(six.left[0].status, TokenStatus::Modified);
        let four = run("z a b", "a b z");
        assert_eq!(four.left[0].status, TokenStatus::Unchanged);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let config = CompareConfig {
            move_threshold: 1,
            ..CompareConfig::default()
        };
        let c = classify(&tokenize("a x b"), &tokenize("x a b"), &config);
        assert_eq!(c.left[2].status, TokenStatus::Modified);
    }

    #[test]
    fn samples_cap_but_counts_do_not() {
        let left = "one two three four five six seven eight";
        let c = run(left, "");
        assert_eq!(c.removed_count, 15);
        assert_eq!(c.removed_sample.len(), 6);
        assert_eq!(c.removed_sample, vec!["one", " ", "two", " ", "three", " "]);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let c = run("Fox", "fox");
        assert_eq!(c.left[0].status, TokenStatus::Removed);
        assert_eq!(c.right[0].status, TokenStatus::Added);
    }

    #[test]
    fn empty_inputs_yield_empty_classification() {
        let c = run("", "");
        assert!(c.left.is_empty());
        assert!(c.right.is_empty());
        assert!(c.added_sample.is_empty());
        assert_eq!(c.modified_count, 0);
    }
}
