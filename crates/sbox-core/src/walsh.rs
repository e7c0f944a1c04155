//! Fast Walsh–Hadamard transform over 8-bit Boolean functions.

use crate::truth_table::BooleanFunction;
use crate::sbox::SIZE;

/// Walsh spectrum: one signed correlation per linear mask.
///
/// The function is encoded with polarity `b -> 2b - 1` (0 becomes −1), so
/// entries are exact integers in `-256..=256`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WalshSpectrum([i32; SIZE]);

impl WalshSpectrum {
    /// Computes the spectrum of `f`.
    pub fn of(f: &BooleanFunction) -> Self {
        let mut values = [0i32; SIZE];
        for (w, &b) in values.iter_mut().zip(f.values().iter()) {
            *w = 2 * i32::from(b) - 1;
        }
        fwht_in_place(&mut values);
        Self(values)
    }

    /// Coefficient for `mask`.
    #[inline]
    pub fn get(&self, mask: u8) -> i32 {
        self.0[mask as usize]
    }

    /// Borrow all coefficients, indexed by mask.
    pub fn values(&self) -> &[i32; SIZE] {
        &self.0
    }

    /// Largest `|W(mask)|` over every mask, the zero mask included.
    pub fn max_absolute(&self) -> u32 {
        self.0.iter().map(|w| w.unsigned_abs()).max().unwrap_or(0)
    }

    /// Hamming distance to the nearest affine function, `2^(n-1) - max|W| / 2`.
    pub fn nonlinearity(&self) -> f64 {
        (SIZE / 2) as f64 - f64::from(self.max_absolute()) / 2.0
    }
}

impl core::fmt::Debug for WalshSpectrum {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("WalshSpectrum")
            .field(&self.0.as_slice())
            .finish()
    }
}

/// Convenience wrapper around [`WalshSpectrum::of`].
pub fn transform(f: &BooleanFunction) -> WalshSpectrum {
    WalshSpectrum::of(f)
}

/// In-place butterfly: stage `i` combines pairs `2^i` apart into `(a + b, a - b)`.
fn fwht_in_place(values: &mut [i32]) {
    debug_assert!(values.len().is_power_of_two());
    let mut half = 1;
    while half < values.len() {
        for block in values.chunks_exact_mut(half * 2) {
            let (lo, hi) = block.split_at_mut(half);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (x, y) = (*a, *b);
                *a = x + y;
                *b = x - y;
            }
        }
        half *= 2;
    }
}
