use std::os::raw::c_char;

use ledo_compare::tokenize::token_texts;
use ledo_compare::{tokenize, CompareConfig, CompareEngine};
use ledo_core::Result;

use crate::marshal::{deserialize_json, optional_str, text_or_empty, to_json};
use crate::result::LedoResult;

// ---------------------------------------------------------------------------
// Memory management
// ---------------------------------------------------------------------------

/// Free a `LedoResult` that was returned by any `ledo_*` function.
///
/// Passing a null pointer is a no-op.
///
/// # Safety
///
/// `ptr` must be either null or a valid pointer that was previously returned
/// by one of the `ledo_*` functions and has not yet been freed.
#[no_mangle]
pub unsafe extern "C" fn ledo_free(ptr: *mut LedoResult) {
    LedoResult::free(ptr);
}

// ---------------------------------------------------------------------------
// Tokenize
// ---------------------------------------------------------------------------

/// Tokenize `text` and return the token strings as a JSON array.
///
/// A null `text` is treated as the empty string.
///
/// The returned pointer must be freed with `ledo_free`.
///
/// # Safety
///
/// `text` must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn ledo_tokenize(text: *const c_char) -> *mut LedoResult {
    let text = match text_or_empty(text) {
        Ok(s) => s,
        Err(e) => return LedoResult::failure(&e.to_string()),
    };

    let tokens = tokenize(&text);
    respond(to_json(&token_texts(&tokens)))
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// Compare two documents' raw text.
///
/// `text_a`        — null-terminated UTF-8 string; null means empty.
/// `text_b`        — null-terminated UTF-8 string; null means empty.
/// `options_json`  — JSON `CompareConfig` object (may be `"{}"` or null for
///                   defaults).
///
/// Returns a `LedoResult` whose `data` field is a `DiffResult` JSON object on
/// success.
///
/// The returned pointer must be freed with `ledo_free`.
///
/// # Safety
///
/// Every pointer argument must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn ledo_compare(
    text_a: *const c_char,
    text_b: *const c_char,
    options_json: *const c_char,
) -> *mut LedoResult {
    respond(compare_inner(text_a, text_b, options_json))
}

/// Compare many document pairs in parallel.
///
/// `pairs_json`    — JSON array of `[text_a, text_b]` string pairs.
/// `options_json`  — JSON `CompareConfig` object, or null for defaults.
///
/// Returns a `LedoResult` whose `data` field is a JSON array of `DiffResult`
/// objects in input order.
///
/// The returned pointer must be freed with `ledo_free`.
///
/// # Safety
///
/// `pairs_json` must be a valid null-terminated C string; `options_json` must
/// be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn ledo_compare_batch(
    pairs_json: *const c_char,
    options_json: *const c_char,
) -> *mut LedoResult {
    respond(compare_batch_inner(pairs_json, options_json))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

unsafe fn compare_inner(
    text_a: *const c_char,
    text_b: *const c_char,
    options_json: *const c_char,
) -> Result<String> {
    let text_a = text_or_empty(text_a)?;
    let text_b = text_or_empty(text_b)?;
    let engine = engine_from_options(options_json)?;

    to_json(&engine.compare(&text_a, &text_b))
}

unsafe fn compare_batch_inner(
    pairs_json: *const c_char,
    options_json: *const c_char,
) -> Result<String> {
    let pairs_json = text_or_empty(pairs_json)?;
    let pairs: Vec<(String, String)> = deserialize_json(&pairs_json)?;
    let engine = engine_from_options(options_json)?;

    to_json(&engine.compare_batch(&pairs))
}

unsafe fn engine_from_options(options_json: *const c_char) -> Result<CompareEngine> {
    let config = match optional_str(options_json)? {
        Some(json) => CompareConfig::from_json(&json)?,
        None => CompareConfig::default(),
    };
    Ok(CompareEngine::new(config))
}

fn respond(payload: Result<String>) -> *mut LedoResult {
    match payload {
        Ok(json) => LedoResult::success(&json),
        Err(e) => LedoResult::failure(&e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
