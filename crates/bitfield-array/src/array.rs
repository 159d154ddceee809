//! Ordered sequence of [BitField] slots packed into one [Packed] integer.

use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use crate::{
    errors::{IndexError, LayoutError},
    field::BitField,
    order::ByteOrder,
    packed::Packed,
};

/// Input to [BitFieldArray::assign]: one value for the first empty slot, or
/// several values for successive empty slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assign {
    One(u64),
    Many(Vec<u64>),
}

impl From<u64> for Assign {
    fn from(value: u64) -> Self {
        Assign::One(value)
    }
}

impl From<Vec<u64>> for Assign {
    fn from(values: Vec<u64>) -> Self {
        Assign::Many(values)
    }
}

impl From<&[u64]> for Assign {
    fn from(values: &[u64]) -> Self {
        Assign::Many(values.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for Assign {
    fn from(values: [u64; N]) -> Self {
        Assign::Many(values.to_vec())
    }
}

/// Fields packed least-significant first: field `i` lands at the sum of the widths of fields `0..i`.
///
/// Only the prefix of assigned fields is exported; the first empty field ends the packed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFieldArray {
    fields: Vec<BitField>,
}

impl BitFieldArray {
    /// Builds one empty field per width, in order.
    pub fn new(widths: &[usize]) -> Result<Self, LayoutError> {
        if widths.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }

        let fields = widths
            .iter()
            .map(|&width| BitField::new(width))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("created bit field array with widths {widths:?}");

        Ok(Self { fields })
    }

    /// Dispatches to [Self::assign_one] or [Self::assign_many].
    pub fn assign(&mut self, input: impl Into<Assign>) -> &mut Self {
        match input.into() {
            Assign::One(value) => self.assign_one(value),
            Assign::Many(values) => self.assign_many(values),
        }
    }

    /// Assigns `value` to the first empty field. Does nothing when every field is set.
    pub fn assign_one(&mut self, value: u64) -> &mut Self {
        match self.fields.iter_mut().find(|field| field.is_empty()) {
            Some(field) => field.assign(value),
            None => log::debug!("no empty field left, discarding value {value}"),
        }

        self
    }

    /// Pairs `values` with the fields that are empty right now, left to right.
    ///
    /// Stops when either runs out. Fields that already hold a value are never overwritten.
    pub fn assign_many<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut values = values.into_iter();

        for field in self.fields.iter_mut().filter(|field| field.is_empty()) {
            match values.next() {
                Some(value) => field.assign(value),
                None => break,
            }
        }

        self
    }

    /// Removes the field at `index`, shifting later fields down by one.
    pub fn delete(&mut self, index: usize) -> Result<BitField, IndexError> {
        if index >= self.fields.len() {
            return Err(IndexError {
                index,
                len: self.fields.len(),
            });
        }

        let removed = self.fields.remove(index);
        log::debug!(
            "deleted field {index} ({} bits), {} fields left",
            removed.max_bits(),
            self.fields.len()
        );

        Ok(removed)
    }

    /// Packs the leading run of assigned fields. Returns zero when the first field is empty.
    pub fn export(&self) -> Packed {
        let mut packed = Packed::zero();
        let mut shift = 0;

        for field in &self.fields {
            let Some(value) = field.value() else {
                break;
            };

            packed.or_shifted(value, shift);
            shift += field.max_bits();
        }

        log::trace!("exported {} bits from {} fields", packed.bit_len(), self.fields.len());

        packed
    }

    /// [Self::export] as a minimal byte string; zero exports as a single `0x00`.
    pub fn export_as_bytes(&self, order: ByteOrder) -> Vec<u8> {
        self.export().to_bytes(order)
    }

    /// Current value of every field, `None` for empty ones.
    pub fn to_list(&self) -> Vec<Option<u64>> {
        self.fields.iter().map(BitField::value).collect()
    }

    pub fn from_int(&mut self, value: u128) -> &mut Self {
        self.from_packed(&Packed::from(value))
    }

    /// Splits `packed` by the field widths and feeds the pieces to [Self::assign_many].
    ///
    /// One piece is produced per field, but only empty fields take one, in order.
    pub fn from_packed(&mut self, packed: &Packed) -> &mut Self {
        let mut offset = 0;
        let mut pieces = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            pieces.push(packed.extract(offset, field.max_bits()));
            offset += field.max_bits();
        }

        log::trace!(
            "decoding {} bits into {} fields",
            packed.bit_len(),
            self.fields.len()
        );

        self.assign_many(pieces)
    }

    pub fn from_bytes(&mut self, bytes: &[u8], order: ByteOrder) -> &mut Self {
        self.from_packed(&Packed::from_bytes(bytes, order))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when every field has been deleted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when no field is empty.
    pub fn is_full(&self) -> bool {
        self.fields.iter().all(|field| !field.is_empty())
    }

    pub fn get(&self, index: usize) -> Option<&BitField> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BitField> {
        self.fields.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, BitField> {
        self.fields.iter()
    }

    pub fn widths(&self) -> Vec<usize> {
        self.fields.iter().map(BitField::max_bits).collect()
    }

    /// Sum of all field widths.
    pub fn total_bits(&self) -> usize {
        self.fields.iter().map(BitField::max_bits).sum()
    }
}

impl Index<usize> for BitFieldArray {
    type Output = BitField;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl IndexMut<usize> for BitFieldArray {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.fields[index]
    }
}

impl<'a> IntoIterator for &'a BitFieldArray {
    type Item = &'a BitField;
    type IntoIter = slice::Iter<'a, BitField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for BitFieldArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<BitFieldArray [")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str("]>")
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::LayoutDef> for BitFieldArray {
    type Error = LayoutError;

    fn try_from(value: crate::serde::LayoutDef) -> Result<Self, Self::Error> {
        let mut array = BitFieldArray::new(&value.fields)?;
        array.assign_many(value.values);
        Ok(array)
    }
}
