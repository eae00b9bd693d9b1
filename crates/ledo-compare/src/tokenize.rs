//! Word / whitespace / punctuation tokenizer for document comparison.
//!
//! Tokenization rules:
//! - Every whitespace run is collapsed to a single ASCII space and the text is
//!   trimmed before splitting.
//! - Each remaining space is emitted as its own Whitespace token.
//! - Punctuation characters are extracted as independent single-character
//!   Punctuation tokens.
//! - Everything between two boundaries is one Word token.
//!
//! Joining the token texts reproduces the normalized input exactly.
//!
//! Example:
//!   "Hello,   world!" →
//!   [Hello][,][ ][world][!]

use ledo_core::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Tokenize `text` into a sequence of [`Token`]s.
///
/// Empty or whitespace-only input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = normalize_whitespace(text);
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (offset, ch) in normalized.char_indices() {
        let boundary = if ch == ' ' {
            Some(TokenKind::Whitespace)
        } else if is_punctuation(ch) {
            Some(TokenKind::Punctuation)
        } else {
            None
        };

        match boundary {
            Some(kind) => {
                if let Some(start) = word_start.take() {
                    tokens.push(Token::new(&normalized[start..offset], TokenKind::Word, start));
                }
                let end = offset + ch.len_utf8();
                tokens.push(Token::new(&normalized[offset..end], kind, offset));
            }
            None => {
                word_start.get_or_insert(offset);
            }
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token::new(&normalized[start..], TokenKind::Word, start));
    }

    tokens
}

/// Collapse every whitespace run into a single ASCII space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(is_whitespace)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace as extracted document text sees it: Unicode `White_Space`
/// minus NEL (U+0085), plus the byte-order mark / zero-width no-break space
/// (U+FEFF).
pub fn is_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

/// Borrow the plain text of each token, in order.
pub fn token_texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Return `true` if `ch` is split out as an independent punctuation token.
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\''
            | '-'
            | '–'   // en-dash
            | '—'   // em-dash
            | '\u{2018}' // left single quotation mark
            | '\u{2019}' // right single quotation mark
            | '\u{201C}' // left double quotation mark
            | '\u{201D}' // right double quotation mark
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
