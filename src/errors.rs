//! Error type for [crate::BitBuffer] operations.

use std::fmt;

/// Errors produced by a [crate::BitBuffer] when a call violates its contract.
///
/// A failed call never mutates the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// A width argument is larger than the value type holds (8 for `u8`, 32 for `u32`).
    OutOfRange { num_bits: usize, max_bits: usize },
    /// A read referenced a bit at or beyond the end of the buffer.
    IndexOutOfRange { index: usize, len: usize },
    /// A slice has `start > end` or `end > len`.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A bit string contained something other than `'0'`, `'1'` or `' '`.
    InvalidCharacter(char),
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BitError::OutOfRange { num_bits, max_bits } => {
                write!(f, "num_bits {} out of range 0-{}", num_bits, max_bits)
            }
            BitError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} bits", index, len)
            }
            BitError::InvalidRange { start, end, len } => {
                write!(f, "invalid range {}..{} for {} bits", start, end, len)
            }
            BitError::InvalidCharacter(c) => {
                write!(f, "invalid character {:?} in bit string", c)
            }
        }
    }
}

impl std::error::Error for BitError {}
