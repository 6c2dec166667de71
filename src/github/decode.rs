// src/github/decode.rs

use crate::errors::FetchError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decodes a base64 `content` field from the Contents API into UTF-8 text.
///
/// GitHub wraps the encoded payload at 60 columns, so ASCII whitespace is
/// stripped before decoding.
///
/// # Errors
/// Returns `FetchError::Decode` for invalid base64 or non-UTF-8 content.
///
/// # Examples
/// ```
/// use component_checklist::github::decode_base64_content;
///
/// let text = decode_base64_content("ZnVuY3Rpb24g\nRm9vKCkge30=\n", "Foo.js").unwrap();
/// assert_eq!(text, "function Foo() {}");
/// ```
pub fn decode_base64_content(encoded: &str, path: &str) -> Result<String, FetchError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact).map_err(|e| FetchError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| FetchError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
