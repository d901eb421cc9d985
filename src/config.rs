//! Loader configuration for autobuild
//!
//! Centralized knobs for how a configuration file is read and parsed,
//! with sensible defaults.

use crate::error::{ConfError, Result};

/// Allocation granularity of the load buffer when none is given
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Default cap on the load buffer, in blocks
pub const DEFAULT_MAX_BLOCKS: usize = 8;

/// Size of each read issued against the configuration file
pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

/// Configuration file used when none is named on the command line
pub const DEFAULT_CONFIG_FILE: &str = "autobuild.conf";

/// How repeated keys in one file are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// A second definition is a parse error on the line that repeats it
    #[default]
    Reject,

    /// The earliest definition in the file is kept
    FirstWins,

    /// The latest definition in the file is kept
    LastWins,
}

/// What happens to a final line that has no terminating newline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLine {
    /// End of file terminates the last line
    #[default]
    Parse,

    /// The unterminated tail is dropped without being looked at
    Ignore,
}

/// Options for loading a configuration store
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Growth increment of the load buffer (0 selects [`DEFAULT_BLOCK_SIZE`])
    pub block_size: usize,

    /// Hard cap on the load buffer in bytes (0 means unbounded)
    pub max_size: usize,

    /// Bytes requested from the file per read call
    pub read_chunk_size: usize,

    // -------------------------------------------------------------------------
    // Parser Configuration
    // -------------------------------------------------------------------------
    /// Policy for keys defined more than once
    pub duplicate_keys: DuplicateKeys,

    /// Policy for an unterminated last line
    pub trailing_line: TrailingLine,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            max_size: DEFAULT_MAX_BLOCKS * DEFAULT_BLOCK_SIZE, // 32 KiB
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            duplicate_keys: DuplicateKeys::default(),
            trailing_line: TrailingLine::default(),
        }
    }
}

impl LoaderConfig {
    /// Create a new config builder
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Block size after applying the zero-means-default rule
    pub fn effective_block_size(&self) -> usize {
        if self.block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            self.block_size
        }
    }

    /// Check the options against the buffer contract before any file is opened
    pub fn validate(&self) -> Result<()> {
        let block_size = self.effective_block_size();
        if self.max_size > 0 && self.max_size < block_size {
            return Err(ConfError::InvalidConfig(format!(
                "max_size ({}) is smaller than block_size ({})",
                self.max_size, block_size
            )));
        }
        if self.read_chunk_size == 0 {
            return Err(ConfError::InvalidConfig(
                "read_chunk_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for LoaderConfig
#[derive(Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Set the buffer block size (in bytes)
    pub fn block_size(mut self, size: usize) -> Self {
        self.config.block_size = size;
        self
    }

    /// Set the maximum buffer size (in bytes, 0 for unbounded)
    pub fn max_size(mut self, size: usize) -> Self {
        self.config.max_size = size;
        self
    }

    /// Remove the cap on the buffer size
    pub fn unbounded(mut self) -> Self {
        self.config.max_size = 0;
        self
    }

    /// Set the per-read chunk size (in bytes)
    pub fn read_chunk_size(mut self, size: usize) -> Self {
        self.config.read_chunk_size = size;
        self
    }

    /// Set the duplicate key policy
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.config.duplicate_keys = policy;
        self
    }

    /// Set the unterminated last line policy
    pub fn trailing_line(mut self, policy: TrailingLine) -> Self {
        self.config.trailing_line = policy;
        self
    }

    pub fn build(self) -> LoaderConfig {
        self.config
    }
}
