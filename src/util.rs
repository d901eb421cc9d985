//! Byte and string helpers shared by the parser

use crate::error::{ConfError, ParseReason, Result};

/// Whitespace stripped from lines, keys and values
#[inline]
pub fn is_config_ws(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strip space, tab, CR and LF from both ends of `bytes`
///
/// Returns a view into the input. Trimming a trimmed slice returns it as is.
pub fn trim_ascii_ws(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_config_ws(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_config_ws(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Duplicate a byte view into an owned `String`
///
/// `line` is only used to label the error when `bytes` is not UTF-8.
pub fn dup_str(bytes: &[u8], line: usize) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| ConfError::parse(line, ParseReason::InvalidUtf8))
}
