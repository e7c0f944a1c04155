//! Linear approximation probability.

use sbox_core::bits::masked_parity;
use sbox_core::{SBox, SIZE};

use crate::error::MetricError;
use crate::sweep::{nonzero_inputs, Sweep};

/// 256 parities packed four `u64` words wide, bit `x` of word `x / 64`.
type Packed = [u64; 4];

/// Largest linear bias `|#{x : a·x = b·S(x)} - 128| / 256` over all nonzero
/// input masks `a` and output masks `b`.
pub fn lap(sbox: &SBox) -> f64 {
    let parities = ParityVectors::new(sbox);
    let max = (1u8..=255).map(|a| parities.row_max_bias(a)).max().unwrap_or(0);
    to_probability(max)
}

pub(crate) fn lap_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let parities = ParityVectors::new(sbox);
    let max = sweep.max(&nonzero_inputs(), |&a| parities.row_max_bias(a))?;
    Ok(to_probability(max))
}

fn to_probability(max_bias: u32) -> f64 {
    f64::from(max_bias) / SIZE as f64
}

/// Input-mask and output-mask parity vectors, built once per evaluation.
struct ParityVectors {
    input: [Packed; SIZE],
    output: [Packed; SIZE],
}

impl ParityVectors {
    fn new(sbox: &SBox) -> Self {
        let mut input = [[0u64; 4]; SIZE];
        let mut output = [[0u64; 4]; SIZE];
        for mask in 0u8..=255 {
            input[mask as usize] = pack(|x| masked_parity(x, mask));
            output[mask as usize] = pack(|x| masked_parity(sbox.apply(x), mask));
        }
        Self { input, output }
    }

    /// Number of inputs on which `a·x` and `b·S(x)` agree.
    #[inline]
    fn agreements(&self, a: u8, b: u8) -> u32 {
        let lhs = &self.input[a as usize];
        let rhs = &self.output[b as usize];
        let disagreements: u32 = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(l, r)| (l ^ r).count_ones())
            .sum();
        SIZE as u32 - disagreements
    }

    /// Largest `|agreements - 128|` over nonzero output masks for input mask `a`.
    fn row_max_bias(&self, a: u8) -> u32 {
        (1u8..=255)
            .map(|b| self.agreements(a, b).abs_diff(SIZE as u32 / 2))
            .max()
            .unwrap_or(0)
    }
}

fn pack(f: impl Fn(u8) -> u8) -> Packed {
    let mut words = [0u64; 4];
    for x in 0u8..=255 {
        words[x as usize / 64] |= u64::from(f(x)) << (x % 64);
    }
    words
}
