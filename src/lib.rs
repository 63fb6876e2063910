//! # bitbuf
//!
//! A growable, bit-granular buffer for building binary encodings that emit
//! values narrower than a byte: mode indicators, length fields, flags and
//! padding.
//!
//! Bits are stored MSB-first in packed bytes. Values are appended at the end,
//! read back by index or as byte windows, and sliced into new buffers.
//!
//! ## Example
//!
//! ```
//! use bitbuf::BitBuffer;
//!
//! let mut buffer = BitBuffer::new();
//! buffer.append_byte_value(0b0100, 4).unwrap();
//! buffer.append_int_value(5, 9).unwrap();
//! buffer.append_bytes(b"A");
//!
//! assert_eq!(buffer.len(), 21);
//! assert_eq!(buffer.to_string(), "01000000 00101010 00001");
//! assert_eq!(buffer.byte_window_at(0).unwrap(), 0x40);
//! assert_eq!(buffer.slice(0, 4).unwrap().to_string(), "0100");
//! ```

pub mod bit_buffer;
pub mod bits;
pub mod errors;

pub use bit_buffer::{BitBuffer, Iter};
pub use errors::BitError;
