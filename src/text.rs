//! Best-effort text decoding for source files.

use crate::error::{HygieneError, HygieneResult};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read a file as UTF-8, replacing undecodable byte sequences with U+FFFD.
///
/// Only the I/O itself can fail; malformed encoding never aborts a run.
pub fn read_lossy(path: &Path) -> HygieneResult<String> {
    let bytes = fs::read(path).map_err(|e| HygieneError::read(path, e))?;
    Ok(decode_lossy(path, bytes))
}

pub(crate) fn decode_lossy(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                valid_up_to = err.utf8_error().valid_up_to(),
                "replaced undecodable bytes while reading"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
///
/// Line numbers and the copyright window are both measured on translated
/// text, so CR-only and CRLF files count lines the same way LF files do.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// The first `limit` characters of `text` (not bytes).
pub fn head_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
