//! Error types for building, addressing and decoding a [crate::BitFieldArray].

use std::fmt;

/// Errors produced when building a [crate::field::BitField] or a [crate::BitFieldArray] layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The list of field widths is empty.
    EmptyLayout,
    /// Field width is 0 or greater than 64 bits.
    InvalidFieldWidth(usize),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyLayout => write!(f, "layout needs at least one field"),
            LayoutError::InvalidFieldWidth(width) => {
                write!(f, "invalid field width {width}: expected 1..=64 bits")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Byte order name other than `little` or `big`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteOrderError(pub String);

impl fmt::Display for ByteOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown byte order '{}': expected 'little' or 'big'",
            self.0
        )
    }
}

impl std::error::Error for ByteOrderError {}

/// Field index past the end of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field index {} out of range for array of {} fields",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}
