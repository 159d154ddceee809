//! # bitfield-array
//!
//! Packs a fixed sequence of bounded-width integer fields into one
//! arbitrary-width unsigned integer, and unpacks it again.
//!
//! Fields are laid out least-significant first: the first field occupies the
//! low bits, each following field is shifted left by the total width of the
//! fields before it. The packed value can travel as a [Packed] integer or as
//! a minimal big- or little-endian byte string.
//!
//! ## Example
//!
//! ```
//! use bitfield_array::{BitFieldArray, ByteOrder};
//!
//! let mut array = BitFieldArray::new(&[3, 7, 8, 9]).unwrap();
//! array.assign_many([5, 6, 7, 8]);
//!
//! let packed = array.export();
//! assert_eq!(packed, 5u128 | (6 << 3) | (7 << 10) | (8 << 18));
//!
//! let bytes = array.export_as_bytes(ByteOrder::Big);
//! let mut received = BitFieldArray::new(&[3, 7, 8, 9]).unwrap();
//! received.from_bytes(&bytes, ByteOrder::Big);
//! assert_eq!(received.to_list(), vec![Some(5), Some(6), Some(7), Some(8)]);
//! ```

pub mod array;
pub mod bits;
pub mod errors;
pub mod field;
pub mod order;
pub mod packed;
#[cfg(feature = "serde")]
pub mod serde;

pub use array::{Assign, BitFieldArray};
pub use errors::{ByteOrderError, IndexError, LayoutError};
pub use field::{BitField, MAX_FIELD_BITS};
pub use order::ByteOrder;
pub use packed::Packed;
