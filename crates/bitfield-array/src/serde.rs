//! JSON‑deserializable layout description.
//!
//! A layout lists the field widths of a [crate::BitFieldArray], optionally
//! with initial values and the byte order peers agree on for the packed
//! bytes. It is meant to be shipped as a config file next to the code that
//! exchanges the records, then converted with `BitFieldArray::try_from`.
//!
//! ```json
//! { "fields": [3, 7, 8, 9], "values": [5, 6], "byte_order": "little" }
//! ```

use serde::{Deserialize, Serialize};

/// Byte order of the packed bytes.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrderDef {
    Little,
    #[default]
    Big,
}

/// Top‑level layout: field widths in packing order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LayoutDef {
    /// Width in bits of each field, least‑significant field first.
    pub fields: Vec<usize>,
    /// Values assigned to the leading fields right after construction.
    #[serde(default)]
    pub values: Vec<u64>,
    #[serde(default)]
    pub byte_order: ByteOrderDef,
}
