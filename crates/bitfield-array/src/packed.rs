//! Arbitrary-width unsigned integer holding the concatenated fields of an array.
//!
//! Bits are stored least-significant first (`Lsb0` over `u8`), so bit `n` of the
//! vector has weight `2^n`. The vector never keeps high zero bits: zero is the
//! empty vector and [Packed::bit_len] is the index of the top set bit plus one.

use std::fmt;

use bitvec::prelude::*;

use crate::{bits::bytes_needed, order::ByteOrder};

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Packed {
    bits: BitVec<u8, Lsb0>,
}

impl Packed {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of significant bits; 0 for zero.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    /// `self |= value << shift`.
    pub fn or_shifted(&mut self, value: u64, shift: usize) {
        let significant = (u64::BITS - value.leading_zeros()) as usize;
        if significant == 0 {
            return;
        }

        let end = shift + significant;
        if self.bits.len() < end {
            self.bits.resize(end, false);
        }

        for i in 0..significant {
            if (value >> i) & 1 == 1 {
                self.bits.set(shift + i, true);
            }
        }
    }

    /// Reads `width` bits (at most 64) starting at bit `offset`. Bits above the top read as zero.
    pub fn extract(&self, offset: usize, width: usize) -> u64 {
        let width = width.min(64);
        if width == 0 || offset >= self.bits.len() {
            return 0;
        }

        let end = self.bits.len().min(offset.saturating_add(width));
        self.bits[offset..end].load_le::<u64>()
    }

    /// Minimal byte string holding the value. Zero is encoded as a single `0x00` byte.
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }

        let mut bytes = Vec::with_capacity(bytes_needed(self.bits.len()));
        for chunk in self.bits.chunks(8) {
            bytes.push(chunk.load_le::<u8>());
        }

        if order == ByteOrder::Big {
            bytes.reverse();
        }

        bytes
    }

    /// Reads an unsigned integer of any length. An empty slice is zero.
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Self {
        let mut le = bytes.to_vec();
        if order == ByteOrder::Big {
            le.reverse();
        }

        let mut packed = Packed {
            bits: BitVec::from_vec(le),
        };
        packed.normalize();
        packed
    }

    /// The value as a `u128`, or `None` if it is wider than 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.bits.len() > 128 {
            return None;
        }

        let bytes = self.to_bytes(ByteOrder::Little);
        let mut buf = [0u8; 16];
        buf[..bytes.len()].copy_from_slice(&bytes);

        Some(u128::from_le_bytes(buf))
    }

    fn normalize(&mut self) {
        let len = self.bits.last_one().map_or(0, |top| top + 1);
        self.bits.truncate(len);
    }

    fn hex_digits(&self, upper: bool) -> String {
        let mut digits = String::with_capacity(bytes_needed(self.bits.len()) * 2);
        for (i, byte) in self.to_bytes(ByteOrder::Big).iter().enumerate() {
            let part = match (i, upper) {
                (0, false) => format!("{byte:x}"),
                (0, true) => format!("{byte:X}"),
                (_, false) => format!("{byte:02x}"),
                (_, true) => format!("{byte:02X}"),
            };
            digits.push_str(&part);
        }

        digits
    }
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Packed {
                fn from(value: $ty) -> Self {
                    Packed::from_bytes(&value.to_le_bytes(), ByteOrder::Little)
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl PartialEq<u128> for Packed {
    fn eq(&self, other: &u128) -> bool {
        self.to_u128() == Some(*other)
    }
}

impl fmt::Debug for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packed({self:#x})")
    }
}

impl fmt::LowerHex for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

impl fmt::UpperHex for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}

impl fmt::Binary for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = if self.is_zero() {
            "0".to_string()
        } else {
            (0..self.bits.len())
                .rev()
                .map(|i| if self.bits[i] { '1' } else { '0' })
                .collect()
        };

        f.pad_integral(true, "0b", &digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = Packed::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.bit_len(), 0);
        assert_eq!(zero, 0u128);
        assert_eq!(Packed::from(0u64), zero);
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(Packed::from(1u8).bit_len(), 1);
        assert_eq!(Packed::from(0x80u8).bit_len(), 8);
        assert_eq!(Packed::from(0x100u16).bit_len(), 9);
        assert_eq!(Packed::from(u128::MAX).bit_len(), 128);
    }

    #[test]
    fn test_or_shifted() {
        let mut packed = Packed::zero();
        packed.or_shifted(5, 0);
        packed.or_shifted(6, 3);
        packed.or_shifted(0, 10);
        assert_eq!(packed, 5u128 | (6 << 3));
        assert_eq!(packed.bit_len(), 6);
    }

    #[test]
    fn test_or_shifted_past_128_bits() {
        let mut packed = Packed::zero();
        packed.or_shifted(1, 200);
        assert_eq!(packed.bit_len(), 201);
        assert_eq!(packed.to_u128(), None);
        assert_eq!(packed.extract(200, 1), 1);
        assert_eq!(packed.extract(136, 64), 0);
        assert_eq!(packed.extract(137, 64), 1 << 63);
    }

    #[test]
    fn test_extract() {
        let packed = Packed::from(0b1101_0110u8);
        assert_eq!(packed.extract(0, 4), 0b0110);
        assert_eq!(packed.extract(2, 4), 0b0101);
        assert_eq!(packed.extract(4, 4), 0b1101);
        assert_eq!(packed.extract(6, 8), 0b11);
        assert_eq!(packed.extract(10, 8), 0);
        assert_eq!(packed.extract(0, 0), 0);
    }

    #[test]
    fn test_extract_full_word() {
        let packed = Packed::from(u128::MAX);
        assert_eq!(packed.extract(0, 64), u64::MAX);
        assert_eq!(packed.extract(64, 64), u64::MAX);
        assert_eq!(packed.extract(100, 64), u64::MAX >> 36);
    }

    #[test]
    fn test_to_bytes() {
        let packed = Packed::from(0x0102_03u32);
        assert_eq!(packed.to_bytes(ByteOrder::Big), vec![0x01, 0x02, 0x03]);
        assert_eq!(packed.to_bytes(ByteOrder::Little), vec![0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_zero_to_bytes_is_single_zero_byte() {
        assert_eq!(Packed::zero().to_bytes(ByteOrder::Big), vec![0]);
        assert_eq!(Packed::zero().to_bytes(ByteOrder::Little), vec![0]);
    }

    #[test]
    fn test_from_bytes_ignores_leading_zeros() {
        let big = Packed::from_bytes(&[0, 0, 0x12, 0x34], ByteOrder::Big);
        assert_eq!(big, 0x1234u128);
        assert_eq!(big.to_bytes(ByteOrder::Big), vec![0x12, 0x34]);

        let little = Packed::from_bytes(&[0x34, 0x12, 0, 0], ByteOrder::Little);
        assert_eq!(little, big);
    }

    #[test]
    fn test_from_empty_bytes() {
        assert!(Packed::from_bytes(&[], ByteOrder::Big).is_zero());
        assert!(Packed::from_bytes(&[0, 0], ByteOrder::Little).is_zero());
    }

    #[test]
    fn test_formatting() {
        let packed = Packed::from(0x1_0fu16);
        assert_eq!(format!("{packed:x}"), "10f");
        assert_eq!(format!("{packed:#X}"), "0x10F");
        assert_eq!(format!("{packed:b}"), "100001111");
        assert_eq!(format!("{:#b}", Packed::zero()), "0b0");
        assert_eq!(format!("{packed:?}"), "Packed(0x10f)");
    }
}
