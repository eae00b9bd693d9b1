use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TokenKind / Token
// ---------------------------------------------------------------------------

/// Lexical category of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A maximal run of characters that are neither whitespace nor punctuation.
    Word,
    /// A whitespace run. After normalization this is always a single space.
    Whitespace,
    /// A single punctuation mark.
    Punctuation,
}

/// Atomic unit of text produced by the tokenizer.
///
/// `offset` is the byte offset of the token's first character within the
/// whitespace-normalized document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text exactly as it appears in the normalized document.
    pub text: String,
    pub kind: TokenKind,
    /// Byte offset within the normalized document text.
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, offset: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            offset,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

// ---------------------------------------------------------------------------
// TokenStatus / AnnotatedToken
// ---------------------------------------------------------------------------

/// Disposition of one token after comparing two documents.
///
/// Tokens of the first document are only ever `Unchanged`, `Removed` or
/// `Modified`; tokens of the second are only ever `Unchanged`, `Added` or
/// `Modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    Unchanged,
    /// Present in the first document only.
    Removed,
    /// Present in the second document only.
    Added,
    /// Present in both, but the nearest occurrence on the other side is
    /// further away than the move threshold.
    Modified,
}

/// A token's text paired with its comparison status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub status: TokenStatus,
}

impl AnnotatedToken {
    pub fn new(text: impl Into<String>, status: TokenStatus) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
