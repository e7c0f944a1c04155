//! Nonlinearity and bit-independence nonlinearity via the Walsh spectrum.

use sbox_core::truth_table::{coordinates, extract_bit};
use sbox_core::{BooleanFunction, SBox, WalshSpectrum, OUTPUT_BITS};

use crate::error::MetricError;
use crate::sweep::{output_bit_pairs, Sweep, PAIR_COUNT};

/// Minimum nonlinearity over the eight coordinate functions.
///
/// Each coordinate contributes `128 - max|W| / 2`, with the zero mask
/// included in the maximum, so the result may be a half-integer.
pub fn nonlinearity(sbox: &SBox) -> f64 {
    (0..OUTPUT_BITS)
        .map(|bit| coordinate_distance(sbox, bit))
        .fold(f64::INFINITY, f64::min)
}

/// Mean nonlinearity of `f_i ⊕ f_j` over the 28 pairs of distinct output bits.
pub fn bic_nl(sbox: &SBox) -> f64 {
    let coords = coordinates(sbox);
    let total: f64 = output_bit_pairs()
        .iter()
        .map(|&pair| pair_distance(&coords, pair))
        .sum();
    total / PAIR_COUNT as f64
}

pub(crate) fn nonlinearity_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let bits: Vec<u32> = (0..OUTPUT_BITS).collect();
    let distances = sweep.map(&bits, |&bit| coordinate_distance(sbox, bit))?;
    Ok(distances.into_iter().fold(f64::INFINITY, f64::min))
}

pub(crate) fn bic_nl_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let coords = coordinates(sbox);
    let distances = sweep.map(&output_bit_pairs(), |&pair| pair_distance(&coords, pair))?;
    let total: f64 = distances.into_iter().sum();
    Ok(total / PAIR_COUNT as f64)
}

fn coordinate_distance(sbox: &SBox, bit: u32) -> f64 {
    WalshSpectrum::of(&extract_bit(sbox, bit)).nonlinearity()
}

fn pair_distance(coords: &[BooleanFunction], (i, j): (u32, u32)) -> f64 {
    let combined = coords[i as usize].xor(&coords[j as usize]);
    WalshSpectrum::of(&combined).nonlinearity()
}
