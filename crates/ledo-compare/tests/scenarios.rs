use ledo_compare::tokenize::token_texts;
use ledo_compare::{compare_documents, similarity, tokenize, CompareEngine};
use ledo_core::TokenStatus;

#[test]
fn hello_world_tokens() {
    let tokens = tokenize("Hello, world!");
    assert_eq!(token_texts(&tokens), vec!["Hello", ",", " ", "world", "!"]);
}

#[test]
fn identical_sentences_are_fully_similar() {
    assert_eq!(similarity("the cat sat", "the cat sat"), 100);
}

#[test]
fn disjoint_sentences_share_nothing() {
    assert_eq!(similarity("apple banana", "cherry date"), 0);
}

#[test]
fn empty_texts_are_fully_similar() {
    assert_eq!(similarity("", ""), 100);
}

#[test]
fn appended_word_is_added() {
    let result = compare_documents("The quick fox", "The quick fox jumps");
    let jumps = result
        .tokens_b
        .iter()
        .find(|t| t.text == "jumps")
        .expect("jumps token");
    assert_eq!(jumps.status, TokenStatus::Added);
    assert_eq!(result.added_count, 1);
    assert_eq!(result.removed_count, 0);
}

#[test]
fn far_and_near_moves() {
    let result = compare_documents(
        "Payment is due. The tenant pays rent monthly",
        "The tenant pays rent monthly. Payment is due",
    );

    let status_of = |tokens: &[ledo_core::AnnotatedToken], text: &str| {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.status)
            .expect("token present")
    };

    // "Payment" moves from position 0 to 11; "The" from 7 to 0.
    assert_eq!(status_of(&result.tokens_a, "Payment"), TokenStatus::Modified);
    assert_eq!(status_of(&result.tokens_b, "Payment"), TokenStatus::Modified);
    assert_eq!(status_of(&result.tokens_a, "The"), TokenStatus::Modified);
    assert_eq!(status_of(&result.tokens_b, "The"), TokenStatus::Modified);
    // "." moves from 5 to 9.
    assert_eq!(status_of(&result.tokens_a, "."), TokenStatus::Unchanged);
    assert_eq!(result.similarity_percent, 100);
    assert_eq!(result.added_count, 0);
    assert_eq!(result.removed_count, 0);
}

#[test]
fn rewritten_sentence_summary() {
    let result = compare_documents(
        "LedoCompare helps teams review documents quickly.",
        "LedoCompare enables teams to review files rapidly.",
    );
    assert_eq!(result.removed_sample, vec!["helps", "documents", "quickly"]);
    assert_eq!(result.added_sample, vec!["enables", "to", "files", "rapidly"]);
    assert_eq!(
        result.summary,
        vec![
            "4 additions detected",
            "3 removals detected",
            "0 potential modifications",
        ]
    );
}

#[test]
fn batch_matches_single_comparisons() {
    let pairs = vec![
        ("The quick fox".to_string(), "The quick fox jumps".to_string()),
        ("apple banana".to_string(), "cherry date".to_string()),
        (String::new(), String::new()),
    ];
    let engine = CompareEngine::default();
    let batch = engine.compare_batch(&pairs);
    for ((a, b), result) in pairs.iter().zip(&batch) {
        assert_eq!(result, &compare_documents(a, b));
    }
}

#[test]
fn leading_byte_order_mark_is_not_a_difference() {
    let result = compare_documents("\u{FEFF}The fox", "The fox");
    assert_eq!(result.added_count, 0);
    assert_eq!(result.removed_count, 0);
    assert!(result.is_unchanged());
    assert_eq!(result.similarity_percent, 100);
}
