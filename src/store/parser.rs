//! Line scanner
//!
//! Single left-to-right pass over the loaded bytes. Produces owned,
//! trimmed pairs in file order; sorting happens later in the store.

use crate::config::TrailingLine;
use crate::error::{ConfError, ParseReason, Result};
use crate::util::{dup_str, trim_ascii_ws};

use super::Entry;

/// A pair together with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub line: usize,
    pub entry: Entry,
}

/// Scan `bytes` into pairs, in file order
///
/// Blank lines and lines starting with `#` (after trimming) are skipped.
/// Only newline-terminated lines are parsed unless `trailing` is
/// [`TrailingLine::Parse`], in which case end of input also ends a line.
pub fn scan(bytes: &[u8], trailing: TrailingLine) -> Result<Vec<ParsedLine>> {
    let mut pairs = Vec::new();
    let mut line = 1;
    let mut line_start = 0;
    let mut equals: Option<usize> = None;

    for (offset, &byte) in bytes.iter().enumerate() {
        match byte {
            b'=' if equals.is_none() => equals = Some(offset - line_start),
            b'\n' => {
                if let Some(entry) = parse_line(&bytes[line_start..offset], equals, line)? {
                    pairs.push(ParsedLine { line, entry });
                }
                line += 1;
                line_start = offset + 1;
                equals = None;
            }
            _ => {}
        }
    }

    if line_start < bytes.len() && trailing == TrailingLine::Parse {
        if let Some(entry) = parse_line(&bytes[line_start..], equals, line)? {
            pairs.push(ParsedLine { line, entry });
        }
    }

    Ok(pairs)
}

/// Parse one raw line, given the offset of its first `=` if any
///
/// Returns `Ok(None)` for blank and comment lines. The `=` must sit after
/// the first byte of the raw line.
pub fn parse_line(raw: &[u8], equals: Option<usize>, line: usize) -> Result<Option<Entry>> {
    let trimmed = trim_ascii_ws(raw);
    if trimmed.is_empty() || trimmed[0] == b'#' {
        return Ok(None);
    }

    let split = match equals {
        Some(split) if split > 0 => split,
        _ => return Err(ConfError::parse(line, ParseReason::MissingEquals)),
    };

    let key = trim_ascii_ws(&raw[..split]);
    if key.is_empty() {
        return Err(ConfError::parse(line, ParseReason::EmptyKey));
    }
    let value = trim_ascii_ws(&raw[split + 1..]);

    Ok(Some(Entry {
        key: dup_str(key, line)?,
        value: dup_str(value, line)?,
    }))
}
