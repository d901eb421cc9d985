//! GrowableBuffer Tests
//!
//! Tests verify:
//! - Construction defaults and bound validation
//! - Block-quantized growth
//! - Cap enforcement without state changes
//! - Growth arithmetic helper

use autobuild::buffer::{grown_capacity, GrowableBuffer};
use autobuild::config::DEFAULT_BLOCK_SIZE;
use autobuild::BufferError;

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_buffer_preallocates_one_block() {
    let buffer = GrowableBuffer::new(16, 0).unwrap();

    assert_eq!(buffer.len(), 0);
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 16);
    assert_eq!(buffer.block_size(), 16);
    assert_eq!(buffer.max_size(), None);
}

#[test]
fn test_zero_block_size_uses_default() {
    let buffer = GrowableBuffer::new(0, 0).unwrap();

    assert_eq!(buffer.block_size(), DEFAULT_BLOCK_SIZE);
    assert_eq!(buffer.capacity(), DEFAULT_BLOCK_SIZE);
}

#[test]
fn test_unbounded_constructor() {
    let buffer = GrowableBuffer::unbounded().unwrap();

    assert_eq!(buffer.block_size(), DEFAULT_BLOCK_SIZE);
    assert_eq!(buffer.max_size(), None);
    assert_eq!(buffer.remaining(), None);
}

#[test]
fn test_max_smaller_than_block_fails() {
    let result = GrowableBuffer::new(8, 4);

    assert_eq!(
        result.unwrap_err(),
        BufferError::TooSmall {
            required: 8,
            max: 4
        }
    );
}

#[test]
fn test_max_smaller_than_default_block_fails() {
    let result = GrowableBuffer::new(0, 100);

    assert!(matches!(result, Err(BufferError::TooSmall { .. })));
}

#[test]
fn test_max_equal_to_block_is_allowed() {
    let buffer = GrowableBuffer::new(8, 8).unwrap();

    assert_eq!(buffer.max_size(), Some(8));
    assert_eq!(buffer.remaining(), Some(8));
}

// =============================================================================
// Growth Tests
// =============================================================================

#[test]
fn test_append_within_first_block_keeps_capacity() {
    let mut buffer = GrowableBuffer::new(4, 0).unwrap();

    buffer.append(b"abc").unwrap();

    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.capacity(), 4);
    assert_eq!(buffer.as_slice(), b"abc");
}

#[test]
fn test_append_three_then_five_grows_to_eight() {
    let mut buffer = GrowableBuffer::new(4, 0).unwrap();

    buffer.append(b"abc").unwrap();
    assert_eq!(buffer.capacity(), 4);

    buffer.append(b"defgh").unwrap();
    assert_eq!(buffer.len(), 8);
    assert_eq!(buffer.capacity(), 8);
    assert_eq!(buffer.as_slice(), b"abcdefgh");
}

#[test]
fn test_large_append_jumps_several_blocks() {
    let mut buffer = GrowableBuffer::new(4, 0).unwrap();

    buffer.append(&[7u8; 13]).unwrap();

    assert_eq!(buffer.len(), 13);
    assert_eq!(buffer.capacity(), 16);
}

#[test]
fn test_empty_append_is_noop() {
    let mut buffer = GrowableBuffer::new(4, 4).unwrap();

    buffer.append(b"").unwrap();

    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 4);
}

#[test]
fn test_growth_clamps_to_max() {
    let mut buffer = GrowableBuffer::new(4, 10).unwrap();

    buffer.append(b"12345").unwrap();
    assert_eq!(buffer.capacity(), 8);

    buffer.append(b"6789").unwrap();
    assert_eq!(buffer.len(), 9);
    assert_eq!(buffer.capacity(), 10);
    assert_eq!(buffer.remaining(), Some(1));
}

#[test]
fn test_fill_exactly_to_max() {
    let mut buffer = GrowableBuffer::new(4, 8).unwrap();

    buffer.append(b"1234").unwrap();
    buffer.append(b"5678").unwrap();

    assert_eq!(buffer.len(), 8);
    assert_eq!(buffer.capacity(), 8);
    assert_eq!(buffer.remaining(), Some(0));
}

// =============================================================================
// Bound Enforcement Tests
// =============================================================================

#[test]
fn test_oversized_append_fails_and_leaves_buffer_empty() {
    let mut buffer = GrowableBuffer::new(4, 8).unwrap();

    let result = buffer.append(&[0u8; 10]);

    assert_eq!(
        result.unwrap_err(),
        BufferError::TooSmall {
            required: 10,
            max: 8
        }
    );
    assert_eq!(buffer.len(), 0);
    assert_eq!(buffer.capacity(), 4);
}

#[test]
fn test_failed_append_keeps_prior_content() {
    let mut buffer = GrowableBuffer::new(4, 8).unwrap();
    buffer.append(b"hello").unwrap();

    let result = buffer.append(b"world");

    assert!(matches!(result, Err(BufferError::TooSmall { required: 10, max: 8 })));
    assert_eq!(buffer.as_slice(), b"hello");
    assert_eq!(buffer.capacity(), 8);

    // Still usable afterwards
    buffer.append(b"!!!").unwrap();
    assert_eq!(buffer.as_slice(), b"hello!!!");
}

// =============================================================================
// Growth Arithmetic Tests
// =============================================================================

#[test]
fn test_grown_capacity_rounds_up_to_block() {
    assert_eq!(grown_capacity(1, 4, None), 4);
    assert_eq!(grown_capacity(4, 4, None), 4);
    assert_eq!(grown_capacity(5, 4, None), 8);
    assert_eq!(grown_capacity(4097, 4096, None), 8192);
}

#[test]
fn test_grown_capacity_clamps_to_max() {
    assert_eq!(grown_capacity(9, 4, Some(10)), 10);
    assert_eq!(grown_capacity(7, 4, Some(10)), 8);
}
