use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sbox_core::{aes_sbox, SBox};
use sbox_metrics::{compute, Engine, EngineConfig, MetricKind};

fn bench_metrics(c: &mut Criterion) {
    let sbox = aes_sbox();
    let mut group = c.benchmark_group("metrics");
    group.sample_size(10);
    for metric in MetricKind::ALL {
        group.bench_function(metric.short_name(), |b| {
            b.iter(|| compute(black_box(&sbox), metric));
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut table: [u8; 256] = std::array::from_fn(|x| x as u8);
    table.shuffle(&mut rng);
    let sbox = SBox::new(table);

    let mut group = c.benchmark_group("engine");
    group.sample_size(10);
    for parallel in [false, true] {
        let engine = Engine::with_config(EngineConfig {
            parallel,
            deadline: None,
        });
        let name = if parallel { "evaluate_all_parallel" } else { "evaluate_all_sequential" };
        group.bench_function(name, |b| {
            b.iter(|| engine.evaluate_all(black_box(&sbox)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics, bench_engine);
criterion_main!(benches);
