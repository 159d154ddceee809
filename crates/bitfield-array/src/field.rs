//! A single bounded-width slot of a [crate::BitFieldArray].

use std::fmt;

use crate::{
    bits::{mask, render_binary},
    errors::LayoutError,
};

/// Widest value a single slot can hold.
pub const MAX_FIELD_BITS: usize = 64;

/// One slot: a fixed width and an optional value that never exceeds it.
///
/// Assigning a value wider than `max_bits` keeps only its low `max_bits` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitField {
    max_bits: usize,
    value: Option<u64>,
}

impl BitField {
    /// Creates an empty slot. Fails if `max_bits` is 0 or greater than [MAX_FIELD_BITS].
    pub fn new(max_bits: usize) -> Result<Self, LayoutError> {
        if max_bits == 0 || max_bits > MAX_FIELD_BITS {
            return Err(LayoutError::InvalidFieldWidth(max_bits));
        }

        Ok(BitField {
            max_bits,
            value: None,
        })
    }

    pub fn max_bits(&self) -> usize {
        self.max_bits
    }

    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// Stores the low `max_bits` bits of `raw`, replacing any previous value.
    pub fn assign(&mut self, raw: u64) {
        self.value = Some(mask(raw, self.max_bits));
    }

    /// True until a value has been assigned.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Binary form of the value padded to whole bytes; an empty slot renders as zero.
    pub fn render(&self) -> String {
        render_binary(self.value.unwrap_or(0))
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.render(), self.max_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = BitField::new(3).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.value(), None);
        assert_eq!(field.max_bits(), 3);
    }

    #[test]
    fn test_invalid_width() {
        assert_eq!(
            BitField::new(0).unwrap_err(),
            LayoutError::InvalidFieldWidth(0)
        );
        assert_eq!(
            BitField::new(65).unwrap_err(),
            LayoutError::InvalidFieldWidth(65)
        );
        assert!(BitField::new(64).is_ok());
    }

    #[test]
    fn test_assign_truncates() {
        let mut field = BitField::new(3).unwrap();
        field.assign(0b1011);
        assert_eq!(field.value(), Some(0b011));
        assert!(!field.is_empty());
    }

    #[test]
    fn test_assign_overwrites() {
        let mut field = BitField::new(8).unwrap();
        field.assign(200);
        field.assign(7);
        assert_eq!(field.value(), Some(7));
    }

    #[test]
    fn test_assign_full_width() {
        let mut field = BitField::new(64).unwrap();
        field.assign(u64::MAX);
        assert_eq!(field.value(), Some(u64::MAX));
    }

    #[test]
    fn test_render() {
        let mut field = BitField::new(3).unwrap();
        assert_eq!(field.render(), "00000000");

        field.assign(5);
        assert_eq!(field.render(), "00000101");
        assert_eq!(field.to_string(), "00000101: 3");
    }

    #[test]
    fn test_render_wide_value() {
        let mut field = BitField::new(9).unwrap();
        field.assign(0x1FF);
        assert_eq!(field.to_string(), "0000000111111111: 9");
    }
}
