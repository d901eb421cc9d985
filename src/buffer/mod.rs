//! Buffer Module
//!
//! Append-only byte accumulator used to slurp a file into memory.
//!
//! ## Responsibilities
//! - Grow storage in fixed-size blocks rather than byte by byte
//! - Enforce an optional hard cap on total capacity
//! - Leave contents untouched when an append is refused
//!
//! ## Growth Policy
//! ```text
//!   block_size = 4, max_size = 10
//!
//!   append 3  ──► len 3   cap 4    (fits, no growth)
//!   append 2  ──► len 5   cap 8    (ceil(5/4) * 4)
//!   append 4  ──► len 9   cap 10   (ceil(9/4) * 4 = 12, clamped)
//!   append 2  ──► TooSmall         (9 + 2 > 10, nothing changes)
//! ```

mod growable;

pub use growable::GrowableBuffer;

/// Smallest multiple of `block_size` that holds `required` bytes, clamped to
/// `max_size` when one is set.
///
/// Callers check `required <= max_size` first, so the clamped value is
/// always large enough.
pub fn grown_capacity(required: usize, block_size: usize, max_size: Option<usize>) -> usize {
    let blocks = required.div_ceil(block_size);
    let capacity = blocks.saturating_mul(block_size);
    match max_size {
        Some(max) if capacity > max => max,
        _ => capacity,
    }
}
