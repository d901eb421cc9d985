//! Store Module
//!
//! Loads a `key = value` file and answers point lookups.
//!
//! ## Load Pipeline
//! ```text
//!   path ──► File ──► GrowableBuffer ──► scan ──► sort + resolve ──► ConfigStore
//!            open     chunked reads      lines    duplicates        (immutable)
//! ```
//!
//! ## Responsibilities
//! - Read the file in fixed-size chunks into a bounded buffer
//! - Split newline-terminated lines into trimmed key/value pairs
//! - Sort entries by key so lookups can binary search
//! - Stop at the first error and report it with its line number

mod loader;
mod parser;
mod table;

pub use loader::read_into_buffer;
pub use parser::{parse_line, scan, ParsedLine};
pub use table::ConfigStore;

/// A single key/value pair held by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
