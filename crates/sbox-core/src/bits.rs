//! Bit-level helpers shared by the metric routines.

/// Number of set bits in `x`.
#[inline]
pub const fn hamming_weight(x: u32) -> u32 {
    x.count_ones()
}

/// Bit `i` of `x`, as `0` or `1`.
#[inline]
pub const fn bit(x: u8, i: u32) -> u8 {
    (x >> i) & 1
}

/// `x` with bit `i` inverted.
#[inline]
pub const fn flip_bit(x: u8, i: u32) -> u8 {
    x ^ (1u8 << i)
}

/// Parity of the bits of `x` selected by `mask`, i.e. the GF(2) inner product.
#[inline]
pub const fn masked_parity(x: u8, mask: u8) -> u8 {
    ((x & mask).count_ones() & 1) as u8
}
