//! GrowableBuffer implementation
//!
//! Vec-backed buffer with block-quantized, optionally capped growth.

use tracing::debug;

use crate::config::DEFAULT_BLOCK_SIZE;
use crate::error::BufferError;

use super::grown_capacity;

/// Length-bounded byte buffer that expands in whole blocks
///
/// ## Invariants
/// `0 <= len <= capacity`, and `capacity <= max_size` when bounded.
/// Capacity starts at one block and only grows.
///
/// Contents are exposed as slices only. A slice borrows the buffer, so it
/// cannot outlive an `append` that relocates the storage.
#[derive(Debug)]
pub struct GrowableBuffer {
    /// Owned storage; `data.len()` is the logical length
    data: Vec<u8>,
    /// Allocation granularity
    block_size: usize,
    /// Hard ceiling on capacity (`None` means unbounded)
    max_size: Option<usize>,
    /// Logical capacity in bytes (the Vec may hold slightly more)
    capacity: usize,
}

impl GrowableBuffer {
    /// Create a buffer with one block pre-allocated
    ///
    /// A `block_size` of 0 selects [`DEFAULT_BLOCK_SIZE`]; a `max_size` of 0
    /// means unbounded. Fails with `TooSmall` when `0 < max_size < block_size`.
    pub fn new(block_size: usize, max_size: usize) -> Result<Self, BufferError> {
        let block_size = if block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            block_size
        };

        if max_size > 0 && max_size < block_size {
            return Err(BufferError::TooSmall {
                required: block_size,
                max: max_size,
            });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(block_size)
            .map_err(|_| BufferError::AllocationFailure {
                requested: block_size,
            })?;

        Ok(Self {
            data,
            block_size,
            max_size: (max_size > 0).then_some(max_size),
            capacity: block_size,
        })
    }

    /// Create an unbounded buffer with the default block size
    pub fn unbounded() -> Result<Self, BufferError> {
        Self::new(DEFAULT_BLOCK_SIZE, 0)
    }

    /// Copy `bytes` onto the end of the buffer, growing if needed
    ///
    /// The bound is checked before anything is reallocated, and a failed
    /// reservation leaves length, capacity and contents as they were.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let required = self
            .data
            .len()
            .checked_add(bytes.len())
            .ok_or(BufferError::AllocationFailure {
                requested: usize::MAX,
            })?;

        if let Some(max) = self.max_size {
            if required > max {
                return Err(BufferError::TooSmall { required, max });
            }
        }

        if required > self.capacity {
            let new_capacity = grown_capacity(required, self.block_size, self.max_size);
            self.data
                .try_reserve_exact(new_capacity - self.data.len())
                .map_err(|_| BufferError::AllocationFailure {
                    requested: new_capacity,
                })?;

            debug!(
                old_capacity = self.capacity,
                new_capacity, "grew load buffer"
            );
            self.capacity = new_capacity;
        }

        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Bytes appended so far
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes appended so far
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current logical capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Maximum capacity, or `None` when unbounded
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Bytes that can still be appended before hitting the cap
    pub fn remaining(&self) -> Option<usize> {
        self.max_size.map(|max| max - self.data.len())
    }
}

impl AsRef<[u8]> for GrowableBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
