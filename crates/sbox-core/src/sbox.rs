//! Validated 8-bit substitution table.

use crate::error::ValidationError;

/// Number of entries in an 8-bit S-box.
pub const SIZE: usize = 256;

/// Input width `n` in bits.
pub const INPUT_BITS: u32 = 8;

/// Output width `m` in bits.
pub const OUTPUT_BITS: u32 = 8;

/// 256-entry lookup table mapping each byte to a byte.
///
/// The table is not required to be a permutation. Once constructed it is
/// immutable, so every metric works on the same snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SBox([u8; SIZE]);

impl SBox {
    /// Wraps a table that is valid by construction.
    pub const fn new(table: [u8; SIZE]) -> Self {
        Self(table)
    }

    /// The identity map `x -> x`.
    pub fn identity() -> Self {
        let mut table = [0u8; SIZE];
        for (x, entry) in table.iter_mut().enumerate() {
            *entry = x as u8;
        }
        Self(table)
    }

    /// The constant map `x -> value`.
    pub const fn constant(value: u8) -> Self {
        Self([value; SIZE])
    }

    /// Validates untyped integers, e.g. values parsed from user text.
    ///
    /// Length is checked first, then every entry in order, so the reported
    /// index is the first offending position.
    pub fn from_values(values: &[i64]) -> Result<Self, ValidationError> {
        if values.len() != SIZE {
            return Err(ValidationError::Length {
                found: values.len(),
            });
        }
        let mut table = [0u8; SIZE];
        for (index, (&value, entry)) in values.iter().zip(table.iter_mut()).enumerate() {
            *entry = u8::try_from(value).map_err(|_| ValidationError::OutOfRange { index, value })?;
        }
        Ok(Self(table))
    }

    /// Looks up `x`.
    #[inline]
    pub fn apply(&self, x: u8) -> u8 {
        self.0[x as usize]
    }

    /// Borrow the underlying table.
    #[inline]
    pub fn table(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Returns true if every output value occurs exactly once.
    pub fn is_bijective(&self) -> bool {
        let mut seen = [false; SIZE];
        for &y in self.0.iter() {
            if seen[y as usize] {
                return false;
            }
            seen[y as usize] = true;
        }
        true
    }

    /// Returns the inverse table when the S-box is a permutation.
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_bijective() {
            return None;
        }
        let mut table = [0u8; SIZE];
        for (x, &y) in self.0.iter().enumerate() {
            table[y as usize] = x as u8;
        }
        Some(Self(table))
    }
}

impl From<[u8; SIZE]> for SBox {
    fn from(value: [u8; SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for SBox {
    type Error = ValidationError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let table: [u8; SIZE] = value
            .try_into()
            .map_err(|_| ValidationError::Length { found: value.len() })?;
        Ok(Self(table))
    }
}

impl TryFrom<&[i64]> for SBox {
    type Error = ValidationError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        Self::from_values(value)
    }
}

impl core::fmt::Debug for SBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SBox").field(&self.0.as_slice()).finish()
    }
}
