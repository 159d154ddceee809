//! Low-level masking and rendering helpers shared by fields and the packed integer.

/// Keeps the low `bits` bits of `value`. `bits >= 64` keeps the whole value.
pub fn mask(value: u64, bits: usize) -> u64 {
    if bits >= 64 {
        value
    } else {
        value & ((1u64 << bits) - 1)
    }
}

/// Binary digits of `value`, zero-padded on the left to a multiple of 8.
pub fn render_binary(value: u64) -> String {
    let digits = format!("{value:b}");
    let width = bytes_needed(digits.len()) * 8;

    format!("{digits:0>width$}")
}

/// Number of bytes needed to hold `bit_len` bits.
pub fn bytes_needed(bit_len: usize) -> usize {
    bit_len.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(0b1011, 3), 0b011);
        assert_eq!(mask(0xFF, 8), 0xFF);
        assert_eq!(mask(0xFF, 0), 0);
    }

    #[test]
    fn test_mask_full_width() {
        assert_eq!(mask(u64::MAX, 64), u64::MAX);
        assert_eq!(mask(u64::MAX, 63), u64::MAX >> 1);
    }

    #[test]
    fn test_render_binary() {
        assert_eq!(render_binary(5), "00000101");
        assert_eq!(render_binary(0), "00000000");
        assert_eq!(render_binary(0x1FF), "0000000111111111");
        assert_eq!(render_binary(0xFF), "11111111");
    }

    #[test]
    fn test_bytes_needed() {
        assert_eq!(bytes_needed(0), 0);
        assert_eq!(bytes_needed(1), 1);
        assert_eq!(bytes_needed(8), 1);
        assert_eq!(bytes_needed(9), 2);
    }
}
