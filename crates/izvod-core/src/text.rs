//! Text unescaping for decoder-encoded glyph runs.
//!
//! The external decoder percent-encodes glyph text (spaces, diacritics,
//! punctuation). All matching against glyph text happens on the decoded form.

use std::borrow::Cow;

/// Percent-decode a glyph's text.
///
/// Malformed sequences (truncated `%` escapes, invalid UTF-8) fall back to
/// the raw input unchanged rather than failing the parse.
pub fn unescape(text: &str) -> Cow<'_, str> {
    match urlencoding::decode(text) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(text),
    }
}
