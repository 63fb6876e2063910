//! Growable bit buffer backed by packed bytes.

use std::{
    fmt::{self, Write},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{bits, errors::BitError};

/// A growable sequence of bits stored MSB-first in packed bytes.
///
/// Bit `i` lives in byte `i / 8` at mask `0x80 >> (i % 8)`. The backing store
/// always holds exactly `ceil(len / 8)` bytes and every bit past `len` in the
/// last byte is zero.
#[derive(Clone, Default)]
pub struct BitBuffer {
    len: usize,
    bytes: Vec<u8>,
}

impl BitBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for at least `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        BitBuffer {
            len: 0,
            bytes: Vec::with_capacity(bits::bytes_for_bits(bits)),
        }
    }

    /// Creates a buffer holding `bits` in order.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut buffer = BitBuffer::with_capacity(bits.len());
        buffer.append_bools(bits);
        buffer
    }

    /// Parses a string of `'0'` and `'1'`. Spaces are skipped so bits can be grouped.
    pub fn from_bit_string(s: &str) -> Result<Self, BitError> {
        let mut buffer = BitBuffer::with_capacity(s.len());

        for c in s.chars() {
            match c {
                '1' => buffer.push_bit(true),
                '0' => buffer.push_bit(false),
                ' ' => {}
                _ => return Err(BitError::InvalidCharacter(c)),
            }
        }

        Ok(buffer)
    }

    /// Returns an independent copy of `other`. Later appends to either side are not shared.
    pub fn copy_of(other: &BitBuffer) -> Self {
        other.clone()
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bits the buffer can hold before it reallocates.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity() * 8
    }

    /// Reserves room for at least `additional` more bits.
    pub fn reserve(&mut self, additional: usize) {
        let needed = bits::bytes_for_bits(self.len + additional);
        self.bytes.reserve(needed.saturating_sub(self.bytes.len()));
    }

    /// Extends the backing store to cover `new_len` bits. New bits are zero.
    fn grow_to(&mut self, new_len: usize) {
        let needed = bits::bytes_for_bits(new_len);
        if needed > self.bytes.len() {
            self.bytes.resize(needed, 0);
        }
    }

    fn push_bit(&mut self, bit: bool) {
        self.grow_to(self.len + 1);
        if bit {
            bits::set_bit_at(&mut self.bytes, self.len);
        }
        self.len += 1;
    }

    /// Appends the low `num_bits` of `value`, most significant first.
    fn push_value(&mut self, value: u64, num_bits: usize) {
        self.reserve(num_bits);
        for i in (0..num_bits).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    pub fn append_bool(&mut self, value: bool) {
        self.push_bit(value);
    }

    pub fn append_bools(&mut self, values: &[bool]) {
        self.reserve(values.len());
        for &value in values {
            self.push_bit(value);
        }
    }

    /// Appends `value` `count` times.
    pub fn append_repeated(&mut self, count: usize, value: bool) {
        if !value {
            self.grow_to(self.len + count);
            self.len += count;
            return;
        }

        self.reserve(count);
        for _ in 0..count {
            self.push_bit(true);
        }
    }

    /// Appends every bit of `other` in order. `other` is left untouched.
    pub fn append_bits(&mut self, other: &BitBuffer) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }

        self.reserve(other.len);
        for pos in 0..other.len {
            self.push_bit(bits::read_bit_at(&other.bytes, pos));
        }
    }

    /// Appends the low `num_bits` bits of `value`, MSB first. `num_bits` must be at most 8.
    pub fn append_byte_value(&mut self, value: u8, num_bits: usize) -> Result<(), BitError> {
        if num_bits > 8 {
            return Err(BitError::OutOfRange {
                num_bits,
                max_bits: 8,
            });
        }

        self.push_value(value as u64, num_bits);
        Ok(())
    }

    /// Appends the low `num_bits` bits of `value`, MSB first. `num_bits` must be at most 32.
    pub fn append_int_value(&mut self, value: u32, num_bits: usize) -> Result<(), BitError> {
        if num_bits > 32 {
            return Err(BitError::OutOfRange {
                num_bits,
                max_bits: 32,
            });
        }

        self.push_value(value as u64, num_bits);
        Ok(())
    }

    /// Appends each byte as 8 bits, MSB first.
    pub fn append_bytes(&mut self, data: &[u8]) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(data);
            self.len += data.len() * 8;
            return;
        }

        self.reserve(data.len() * 8);
        for &byte in data {
            self.push_value(byte as u64, 8);
        }
    }

    /// Returns the bit at `index`.
    pub fn bit_at(&self, index: usize) -> Result<bool, BitError> {
        self.check_index(index)?;
        Ok(bits::read_bit_at(&self.bytes, index))
    }

    /// Reads up to 8 bits starting at `index`, MSB first.
    ///
    /// Near the end of the buffer only the remaining bits are read and the
    /// result is right-aligned: on `0,1,0,1,0,1,1,0,1`, `byte_window_at(8)` is `0x01`.
    pub fn byte_window_at(&self, index: usize) -> Result<u8, BitError> {
        self.check_index(index)?;

        let n = (self.len - index).min(8);
        Ok(bits::read_bits_at(&self.bytes, index, n) as u8)
    }

    fn check_index(&self, index: usize) -> Result<(), BitError> {
        if index >= self.len {
            return Err(BitError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(())
    }

    /// Returns a new buffer holding bits `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<BitBuffer, BitError> {
        if start > end || end > self.len {
            return Err(BitError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }

        let mut out = BitBuffer::with_capacity(end - start);

        if start % 8 == 0 {
            out.bytes
                .extend_from_slice(&self.bytes[start / 8..bits::bytes_for_bits(end)]);
            out.len = end - start;
            bits::clear_tail(&mut out.bytes, out.len);
        } else {
            for pos in start..end {
                out.push_bit(bits::read_bit_at(&self.bytes, pos));
            }
        }

        Ok(out)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_bool_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Packs the valid bits into `ceil(len / 8)` bytes. Bits past `len` are zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.bytes.clone();
        bits::clear_tail(&mut out, self.len);
        out
    }
}

impl PartialEq for BitBuffer {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let full = self.len / 8;
        if self.bytes[..full] != other.bytes[..full] {
            return false;
        }

        (full * 8..self.len)
            .all(|pos| bits::read_bit_at(&self.bytes, pos) == bits::read_bit_at(&other.bytes, pos))
    }
}

impl Eq for BitBuffer {}

impl Hash for BitBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        let full = self.len / 8;
        self.bytes[..full].hash(state);
        if self.len % 8 != 0 {
            (self.bytes[full] & bits::tail_mask(self.len)).hash(state);
        }
    }
}

/// Bits as `'0'`/`'1'`, with a space between every group of 8.
impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, bit) in self.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                f.write_char(' ')?;
            }
            f.write_char(if bit { '1' } else { '0' })?;
        }

        Ok(())
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len)
            .field("bits", &self.to_string())
            .finish()
    }
}

impl FromStr for BitBuffer {
    type Err = BitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitBuffer::from_bit_string(s)
    }
}

impl From<&[bool]> for BitBuffer {
    fn from(bits: &[bool]) -> Self {
        BitBuffer::from_bits(bits)
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buffer = BitBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl Extend<bool> for BitBuffer {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for bit in iter {
            self.push_bit(bit);
        }
    }
}

impl<'a> IntoIterator for &'a BitBuffer {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bits of a [BitBuffer], front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buffer: &'a BitBuffer,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }

        let bit = bits::read_bit_at(&self.buffer.bytes, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(bits::read_bit_at(&self.buffer.bytes, self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
