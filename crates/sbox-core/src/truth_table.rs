//! Coordinate Boolean functions of an S-box.

use crate::bits::bit;
use crate::sbox::{SBox, OUTPUT_BITS, SIZE};

/// Truth table of a Boolean function on 8 input bits, one `0`/`1` per input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BooleanFunction([u8; SIZE]);

impl BooleanFunction {
    /// Value of the function at `x`.
    #[inline]
    pub fn get(&self, x: u8) -> u8 {
        self.0[x as usize]
    }

    /// Borrow the truth table.
    #[inline]
    pub fn values(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Pointwise XOR, i.e. the sum of two coordinates.
    pub fn xor(&self, rhs: &Self) -> Self {
        let mut out = self.0;
        for (d, r) in out.iter_mut().zip(rhs.0.iter()) {
            *d ^= *r;
        }
        Self(out)
    }
}

impl core::fmt::Debug for BooleanFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("BooleanFunction")
            .field(&self.0.as_slice())
            .finish()
    }
}

/// Extracts the Boolean function induced by bit `output_bit` of every output.
///
/// # Panics
/// Panics if `output_bit >= 8`.
pub fn extract_bit(sbox: &SBox, output_bit: u32) -> BooleanFunction {
    assert!(output_bit < OUTPUT_BITS, "output bit {output_bit} out of range");
    let mut table = [0u8; SIZE];
    for (entry, &y) in table.iter_mut().zip(sbox.table().iter()) {
        *entry = bit(y, output_bit);
    }
    BooleanFunction(table)
}

/// All eight coordinate functions, indexed by output bit.
pub fn coordinates(sbox: &SBox) -> [BooleanFunction; OUTPUT_BITS as usize] {
    std::array::from_fn(|i| extract_bit(sbox, i as u32))
}
