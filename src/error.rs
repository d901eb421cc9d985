//! Error types for autobuild
//!
//! `BufferError` covers the growable buffer on its own; `ConfError` is the
//! unified error for loading and querying a configuration store.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ConfError
pub type Result<T> = std::result::Result<T, ConfError>;

// =============================================================================
// Buffer Errors
// =============================================================================

/// Failures reported by [`GrowableBuffer`](crate::buffer::GrowableBuffer)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The allocator refused to hand out the requested capacity
    #[error("Allocation of {requested} bytes failed")]
    AllocationFailure { requested: usize },

    /// The content (or the configured maximum) does not fit the bound
    #[error("Buffer too small: {required} bytes required, maximum is {max}")]
    TooSmall { required: usize, max: usize },
}

// =============================================================================
// Parse Failure Reasons
// =============================================================================

/// Why a configuration line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseReason {
    /// A non-blank, non-comment line without a `=` after its first character
    MissingEquals,
    /// The text before `=` trims down to nothing
    EmptyKey,
    /// The key was already defined and the loader rejects duplicates
    DuplicateKey { key: String, first_line: usize },
    /// The key or value is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for ParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseReason::MissingEquals => f.write_str("missing '='"),
            ParseReason::EmptyKey => f.write_str("empty key"),
            ParseReason::DuplicateKey { key, first_line } => {
                write!(f, "duplicate key '{}' (first defined on line {})", key, first_line)
            }
            ParseReason::InvalidUtf8 => f.write_str("invalid UTF-8"),
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Unified error type for configuration loading and lookup
#[derive(Debug, Error)]
pub enum ConfError {
    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("Cannot open configuration file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} exceeds the maximum size of {max} bytes", .path.display())]
    FileTooLarge { path: PathBuf, max: usize },

    #[error("Out of memory while reading configuration file {}", .path.display())]
    OutOfMemory { path: PathBuf },

    // -------------------------------------------------------------------------
    // Syntax Errors
    // -------------------------------------------------------------------------
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: ParseReason },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Missing required key '{key}'")]
    KeyNotFound { key: String },

    #[error("Invalid value '{value}' for key '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid loader configuration: {0}")]
    InvalidConfig(String),
}

impl ConfError {
    /// Shorthand for a syntax error on a given line
    pub(crate) fn parse(line: usize, reason: ParseReason) -> Self {
        ConfError::Parse { line, reason }
    }

    /// Line number for syntax errors, `None` for every other kind
    pub fn line(&self) -> Option<usize> {
        match self {
            ConfError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}
