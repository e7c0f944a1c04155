//! End-to-end checks against published values and structural properties.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sbox_core::{aes_sbox, SBox};
use sbox_metrics::{
    bic_sac_pair, compute, evaluate_all, Engine, EngineConfig, MetricError, MetricKind,
};

fn random_permutation(seed: u64) -> SBox {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut table: [u8; 256] = std::array::from_fn(|x| x as u8);
    table.shuffle(&mut rng);
    SBox::new(table)
}

#[test]
fn aes_golden_report() {
    let values: Vec<i64> = aes_sbox().table().iter().map(|&b| i64::from(b)).collect();
    let report = evaluate_all(&values).expect("AES table is valid");
    let expected = [
        (MetricKind::Nl, 112.0),
        (MetricKind::Sac, 0.5048828125),
        (MetricKind::BicNl, 112.0),
        (MetricKind::BicSac, 0.5046),
        (MetricKind::Lap, 0.0625),
        (MetricKind::Dap, 0.015625),
    ];
    assert_eq!(report.results.len(), expected.len());
    for (result, (metric, value)) in report.results.iter().zip(expected) {
        assert_eq!(result.metric, metric);
        assert_eq!(result.value, value, "{metric}");
    }
}

#[test]
fn identity_profile() {
    let sbox = SBox::identity();
    assert_eq!(compute(&sbox, MetricKind::Nl), 0.0);
    assert_eq!(compute(&sbox, MetricKind::Sac), 0.125);
    assert_eq!(compute(&sbox, MetricKind::BicNl), 0.0);
    assert_eq!(compute(&sbox, MetricKind::BicSac), 0.25);
    assert_eq!(compute(&sbox, MetricKind::Lap), 0.5);
    assert_eq!(compute(&sbox, MetricKind::Dap), 1.0);
}

#[test]
fn constant_profile() {
    let sbox = SBox::constant(0x42);
    for metric in MetricKind::ALL {
        assert_eq!(compute(&sbox, metric), 0.0, "{metric}");
    }
}

#[test]
fn invalid_input_is_rejected() {
    let short = vec![0i64; 255];
    assert!(matches!(
        evaluate_all(&short),
        Err(MetricError::Validation(_))
    ));
    let mut wide: Vec<i64> = (0..256).collect();
    wide[255] = 256;
    assert!(matches!(
        sbox_metrics::evaluate(&wide, MetricKind::Sac),
        Err(MetricError::Validation(_))
    ));
}

#[test]
fn repeated_parallel_runs_are_bit_identical() {
    let sbox = random_permutation(99);
    let engine = Engine::new();
    let first = engine.evaluate_all(&sbox).expect("first run");
    let second = engine.evaluate_all(&sbox).expect("second run");
    for (a, b) in first.results.iter().zip(second.results.iter()) {
        assert_eq!(a.value.to_bits(), b.value.to_bits(), "{}", a.metric);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn metrics_stay_in_range(table in proptest::collection::vec(any::<u8>(), 256)) {
        let sbox = SBox::try_from(table.as_slice()).expect("256 entries");
        let report = Engine::with_config(EngineConfig { parallel: true, deadline: None })
            .evaluate_all(&sbox)
            .expect("no budget");
        for result in &report.results {
            match result.metric {
                MetricKind::Nl | MetricKind::BicNl => {
                    prop_assert!((0.0..=128.0).contains(&result.value));
                }
                _ => prop_assert!((0.0..=1.0).contains(&result.value)),
            }
        }
    }

    #[test]
    fn sequential_and_parallel_agree(seed in any::<u64>()) {
        let sbox = random_permutation(seed);
        let sequential = Engine::with_config(EngineConfig { parallel: false, deadline: None });
        let parallel = Engine::new();
        prop_assert_eq!(sequential.evaluate_all(&sbox), parallel.evaluate_all(&sbox));
    }

    #[test]
    fn bic_sac_is_symmetric_in_the_pair(seed in any::<u64>(), i in 0u32..8, j in 0u32..8) {
        let sbox = random_permutation(seed);
        prop_assert_eq!(bic_sac_pair(&sbox, i, j), bic_sac_pair(&sbox, j, i));
    }
}
