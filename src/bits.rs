//! Low-level bit access on packed byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.
//! Callers are responsible for keeping positions inside the slice.

/// Number of bytes needed to hold `bits` bits.
pub fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Reads the bit at `bit_pos` (0 = MSB of first byte).
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> bool {
    let byte_index = bit_pos / 8;
    let bit_index = bit_pos % 8;

    (data[byte_index] >> (7 - bit_index)) & 1 == 1
}

/// Sets the bit at `bit_pos` to 1.
pub fn set_bit_at(data: &mut [u8], bit_pos: usize) {
    data[bit_pos / 8] |= 0x80 >> (bit_pos % 8);
}

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits). MSB-first.
///
/// The result is right-aligned: the last bit read is the least significant.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> u64 {
    debug_assert!(n <= 64);

    let mut value = 0u64;

    for pos in bit_pos..bit_pos + n {
        value = (value << 1) | read_bit_at(data, pos) as u64;
    }

    value
}

/// Mask selecting the valid bits of the last byte of a `bits`-long sequence.
pub fn tail_mask(bits: usize) -> u8 {
    match bits % 8 {
        0 => 0xFF,
        rem => !(0xFF >> rem),
    }
}

/// Clears every bit of the last byte that lies beyond `bits`.
pub fn clear_tail(data: &mut [u8], bits: usize) {
    if let Some(last) = data.last_mut() {
        *last &= tail_mask(bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_for_bits() {
        assert_eq!(bytes_for_bits(0), 0);
        assert_eq!(bytes_for_bits(1), 1);
        assert_eq!(bytes_for_bits(8), 1);
        assert_eq!(bytes_for_bits(9), 2);
    }

    #[test]
    fn test_read_bit_at() {
        let data = [0b1000_0001, 0b0100_0000];
        assert!(read_bit_at(&data, 0));
        assert!(!read_bit_at(&data, 1));
        assert!(read_bit_at(&data, 7));
        assert!(read_bit_at(&data, 9));
    }

    #[test]
    fn test_set_bit_at() {
        let mut data = [0u8; 2];
        set_bit_at(&mut data, 0);
        set_bit_at(&mut data, 10);
        assert_eq!(data, [0b1000_0000, 0b0010_0000]);
    }

    #[test]
    fn test_read_bits_at() {
        let data = [0b0101_0110, 0b1000_0000];
        assert_eq!(read_bits_at(&data, 0, 8), 0x56);
        assert_eq!(read_bits_at(&data, 1, 8), 0xAD);
        assert_eq!(read_bits_at(&data, 5, 4), 0x0D);
        assert_eq!(read_bits_at(&data, 3, 0), 0);
    }

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask(0), 0xFF);
        assert_eq!(tail_mask(1), 0b1000_0000);
        assert_eq!(tail_mask(7), 0b1111_1110);
        assert_eq!(tail_mask(16), 0xFF);
    }

    #[test]
    fn test_clear_tail() {
        let mut data = [0xFF, 0xFF];
        clear_tail(&mut data, 11);
        assert_eq!(data, [0xFF, 0b1110_0000]);

        let mut empty: [u8; 0] = [];
        clear_tail(&mut empty, 0);
    }
}
