//! ConfigStore implementation
//!
//! Sorted entry table with binary search lookups.

use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::{DuplicateKeys, LoaderConfig};
use crate::error::{ConfError, ParseReason, Result};

use super::{read_into_buffer, scan, Entry, ParsedLine};

/// Immutable, queryable key → value store loaded from a file
///
/// ## Lifecycle
/// Entries are built once by [`open`](Self::open) and never change. The
/// store owns every key and value; dropping it releases all of them.
/// Since nothing mutates after construction, shared references may be
/// read from many threads at once.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Source the entries were read from
    path: PathBuf,
    /// Unique keys, sorted ascending (bytewise)
    entries: Vec<Entry>,
}

impl ConfigStore {
    /// Load `path` with the default loader configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, &LoaderConfig::default())
    }

    /// Load `path` with an explicit loader configuration
    ///
    /// 1. Open the file (`FileNotFound` on failure)
    /// 2. Read it in chunks into a bounded buffer
    /// 3. Scan lines into pairs
    /// 4. Sort by key and resolve duplicates
    ///
    /// The file and the buffer are released on every path out.
    pub fn open(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let mut file = File::open(path).map_err(|source| ConfError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(&mut file, path, config)?;
        info!(
            path = %path.display(),
            entries = store.len(),
            "loaded configuration"
        );
        Ok(store)
    }

    /// Load from any reader; `path` is recorded as the source and labels errors
    pub fn from_reader<R: Read>(
        reader: &mut R,
        path: impl Into<PathBuf>,
        config: &LoaderConfig,
    ) -> Result<Self> {
        let path = path.into();
        let buffer = read_into_buffer(reader, &path, config)?;
        let pairs = scan(buffer.as_slice(), config.trailing_line)?;
        drop(buffer);

        Ok(Self {
            path,
            entries: finalize(pairs, config.duplicate_keys)?,
        })
    }

    /// Parse in-memory bytes without any size cap
    pub fn parse(bytes: &[u8], config: &LoaderConfig) -> Result<Self> {
        let pairs = scan(bytes, config.trailing_line)?;
        Ok(Self {
            path: PathBuf::new(),
            entries: finalize(pairs, config.duplicate_keys)?,
        })
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the value for `key`, or `None` if the key is absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|entry| entry.key.as_str().cmp(key))
            .ok()
            .map(|idx| self.entries[idx].value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for `key`, treating absence as an error
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ConfError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Get the value for `key` parsed as `T`
    ///
    /// Returns `Ok(None)` when the key is absent, `InvalidValue` when it is
    /// present but does not parse.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Iterate over all pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the store was loaded from (empty for [`parse`](Self::parse))
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sort pairs by key and collapse repeats according to `policy`
///
/// The sort is stable, so repeats of a key stay in file order.
fn finalize(mut pairs: Vec<ParsedLine>, policy: DuplicateKeys) -> Result<Vec<Entry>> {
    pairs.sort_by(|a, b| a.entry.key.cmp(&b.entry.key));

    let mut entries: Vec<Entry> = Vec::with_capacity(pairs.len());
    let mut last_line = 0;
    // Earliest line in the file that repeats a key: (line, key, first_line)
    let mut rejected: Option<(usize, String, usize)> = None;
    let mut resolved = 0usize;

    for ParsedLine { line, entry } in pairs {
        let repeat = entries.last().is_some_and(|prev| prev.key == entry.key);
        if !repeat {
            entries.push(entry);
            last_line = line;
            continue;
        }

        match policy {
            DuplicateKeys::Reject => {
                if rejected.as_ref().map_or(true, |(l, _, _)| line < *l) {
                    rejected = Some((line, entry.key, last_line));
                }
            }
            DuplicateKeys::FirstWins => resolved += 1,
            DuplicateKeys::LastWins => {
                if let Some(prev) = entries.last_mut() {
                    *prev = entry;
                }
                resolved += 1;
            }
        }
    }

    if let Some((line, key, first_line)) = rejected {
        return Err(ConfError::parse(line, ParseReason::DuplicateKey { key, first_line }));
    }
    if resolved > 0 {
        warn!(resolved, ?policy, "duplicate keys in configuration");
    }

    Ok(entries)
}
