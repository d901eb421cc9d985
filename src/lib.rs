//! # autobuild
//!
//! A small configuration reader for `key = value` files:
//! - Chunked reads into a block-growing, size-capped buffer
//! - Single-pass line scanner with whitespace trimming
//! - Sorted entry table with binary search lookups
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    autobuild binary (cli)                    │
//! │              --config PATH, --require KEY, KEY...            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ open(path) / get(key)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      ConfigStore                             │
//! │            (sorted Vec<Entry>, immutable)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Loader    │          │   Parser    │
//!   │  (chunks)   │─────────►│   (scan)    │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Growable   │
//!   │   Buffer    │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod util;

pub mod buffer;
pub mod store;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use buffer::GrowableBuffer;
pub use config::LoaderConfig;
pub use error::{BufferError, ConfError, ParseReason, Result};
pub use store::ConfigStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of autobuild
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
