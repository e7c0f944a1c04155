//! Differential approximation probability.

use sbox_core::{SBox, SIZE};

use crate::error::MetricError;
use crate::sweep::{nonzero_inputs, Sweep};

/// Largest `#{x : S(x ⊕ dx) ⊕ S(x) = dy} / 256` over nonzero `dx` and `dy`.
pub fn dap(sbox: &SBox) -> f64 {
    let max = (1u8..=255).map(|dx| row_max_count(sbox, dx)).max().unwrap_or(0);
    to_probability(max)
}

pub(crate) fn dap_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let max = sweep.max(&nonzero_inputs(), |&dx| row_max_count(sbox, dx))?;
    Ok(to_probability(max))
}

fn to_probability(max_count: u32) -> f64 {
    f64::from(max_count) / SIZE as f64
}

/// Difference-distribution row for `dx`, maximised over nonzero `dy`.
fn row_max_count(sbox: &SBox, dx: u8) -> u32 {
    let mut histogram = [0u16; SIZE];
    for x in 0u8..=255 {
        let dy = sbox.apply(x ^ dx) ^ sbox.apply(x);
        histogram[dy as usize] += 1;
    }
    histogram[1..].iter().copied().max().map_or(0, u32::from)
}
