use std::ffi::CStr;
use std::os::raw::c_char;

use ledo_core::{LedoError, Result};

/// Serialize `value` to a JSON string.
pub fn to_json(value: &impl serde::Serialize) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a JSON string into `T`.
pub fn deserialize_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Borrow the null-terminated C string at `ptr` and return it as an owned
/// `String`. A null pointer stands for absent text and yields `""`.
///
/// # Safety
///
/// `ptr` must be null or a valid pointer to a null-terminated string that
/// remains alive for the duration of this call.
///
/// Returns [`LedoError::InvalidInput`] if the bytes are not valid UTF-8.
pub unsafe fn text_or_empty(ptr: *const c_char) -> Result<String> {
    Ok(optional_str(ptr)?.unwrap_or_default())
}

/// Like [`text_or_empty`], but distinguishes a null pointer as `None`.
///
/// # Safety
///
/// Same contract as [`text_or_empty`].
pub unsafe fn optional_str(ptr: *const c_char) -> Result<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }

    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| Some(s.to_owned()))
        .map_err(|e| LedoError::InvalidInput(format!("invalid UTF-8 in C string: {}", e)))
}
