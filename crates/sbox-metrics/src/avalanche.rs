//! Strict avalanche criterion and its bit-independence variant.

use sbox_core::bits::{bit, flip_bit, hamming_weight};
use sbox_core::{SBox, INPUT_BITS, OUTPUT_BITS, SIZE};

use crate::error::MetricError;
use crate::sweep::{all_inputs, output_bit_pairs, Sweep, PAIR_COUNT};

/// `n · 2^n · m`: every (input, flipped bit, output bit) triple.
const SAC_TRIALS: f64 = (INPUT_BITS as usize * SIZE * OUTPUT_BITS as usize) as f64;

/// `2^n · n`: every (input, flipped bit) pair for one output-bit pair.
const BIC_SAC_TRIALS: f64 = (SIZE * INPUT_BITS as usize) as f64;

/// Fraction of output bits that change when a single input bit is flipped,
/// averaged over all inputs and all flip positions. Ideally 0.5.
pub fn sac(sbox: &SBox) -> f64 {
    let total: u64 = (0u8..=255).map(|x| sac_row(sbox, x)).sum();
    total as f64 / SAC_TRIALS
}

/// Mean over output-bit pairs of how often exactly one of the two bits
/// changes under a single input-bit flip, rounded to five decimals.
pub fn bic_sac(sbox: &SBox) -> f64 {
    let total: f64 = output_bit_pairs()
        .iter()
        .map(|&(i, j)| bic_sac_pair(sbox, i, j))
        .sum();
    round5(total / PAIR_COUNT as f64)
}

/// BIC-SAC contribution of one pair of output bits, unrounded. Symmetric in
/// `i` and `j`.
///
/// # Panics
/// Panics if either index is not below 8.
pub fn bic_sac_pair(sbox: &SBox, i: u32, j: u32) -> f64 {
    assert!(i < OUTPUT_BITS && j < OUTPUT_BITS, "output bit out of range");
    let mut acc = 0u32;
    for x in 0u8..=255 {
        let y1 = sbox.apply(x);
        for flip in 0..INPUT_BITS {
            let y2 = sbox.apply(flip_bit(x, flip));
            let d = y1 ^ y2;
            acc += u32::from(bit(d, i) ^ bit(d, j));
        }
    }
    f64::from(acc) / BIC_SAC_TRIALS
}

pub(crate) fn sac_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let total = sweep.sum(&all_inputs(), |&x| sac_row(sbox, x))?;
    Ok(total as f64 / SAC_TRIALS)
}

pub(crate) fn bic_sac_in(sbox: &SBox, sweep: &Sweep<'_>) -> Result<f64, MetricError> {
    let per_pair = sweep.map(&output_bit_pairs(), |&(i, j)| bic_sac_pair(sbox, i, j))?;
    let total: f64 = per_pair.into_iter().sum();
    Ok(round5(total / PAIR_COUNT as f64))
}

/// Output bits changed across all single-bit flips of `x`.
fn sac_row(sbox: &SBox, x: u8) -> u64 {
    let y = sbox.apply(x);
    (0..INPUT_BITS)
        .map(|flip| u64::from(hamming_weight(u32::from(y ^ sbox.apply(flip_bit(x, flip))))))
        .sum()
}

fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn aes_avalanche_values() {
        let sbox = sbox_core::aes_sbox();
        assert_eq!(sac(&sbox), 0.5048828125);
        assert_eq!(bic_sac(&sbox), 0.5046);
    }

    #[test]
    fn identity_flips_exactly_one_bit() {
        let sbox = SBox::identity();
        assert_eq!(sac(&sbox), 0.125);
        // Exactly one of bits i, j flips when the flipped input bit is i or j.
        assert_eq!(bic_sac(&sbox), 0.25);
    }

    #[test]
    fn constant_never_changes() {
        let sbox = SBox::constant(0x3c);
        assert_eq!(sac(&sbox), 0.0);
        assert_eq!(bic_sac(&sbox), 0.0);
    }

    #[test]
    fn bic_sac_pair_is_symmetric() {
        let mut rng = ChaCha20Rng::from_seed([40u8; 32]);
        let mut table = [0u8; 256];
        rng.fill_bytes(&mut table);
        let sbox = SBox::new(table);
        for (i, j) in output_bit_pairs() {
            assert_eq!(bic_sac_pair(&sbox, i, j), bic_sac_pair(&sbox, j, i));
        }
    }

    #[test]
    fn round5_rounds_to_five_decimals() {
        assert_eq!(round5(0.123456789), 0.12346);
        assert_eq!(round5(0.5), 0.5);
    }

    #[test]
    fn budgeted_paths_match_plain_functions() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        let mut table = [0u8; 256];
        rng.fill_bytes(&mut table);
        let sbox = SBox::new(table);
        let budget = Budget::unlimited();
        for parallel in [false, true] {
            let sweep = Sweep::new(parallel, &budget);
            assert_eq!(sac_in(&sbox, &sweep), Ok(sac(&sbox)));
            assert_eq!(bic_sac_in(&sbox, &sweep), Ok(bic_sac(&sbox)));
        }
    }
}
