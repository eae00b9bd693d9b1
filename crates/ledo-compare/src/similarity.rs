//! Unique-word overlap scoring.
//!
//! Similarity is the Jaccard index of the two documents' word sets, reported
//! as a whole percentage. Word sets ignore order, case, duplicates,
//! punctuation and whitespace; they are unrelated to the token sequences used
//! by [`crate::classify`].

use std::collections::BTreeSet;

/// Extract the set of lowercased alphanumeric words from `text`.
///
/// A word is a maximal run of Unicode alphanumeric characters; everything
/// else separates words and is discarded.
pub fn word_set(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Jaccard similarity of the word sets of `left` and `right`, rounded to the
/// nearest whole percent (halves round up).
///
/// Two texts without any words are 100% similar.
pub fn similarity(left: &str, right: &str) -> u8 {
    let left_words = word_set(left);
    let right_words = word_set(right);
    jaccard_percent(&left_words, &right_words)
}

/// Jaccard index of two sets as a rounded percentage in `0..=100`.
pub fn jaccard_percent(left: &BTreeSet<String>, right: &BTreeSet<String>) -> u8 {
    let intersection = left.intersection(right).count();
    let union = left.len() + right.len() - intersection;
    if union == 0 {
        return 100;
    }

    // round(100 * i / u) without going through floating point.
    let percent = (200 * intersection + union) / (2 * union);
    percent as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
