use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;

use ndarray::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use biophotonics_data::{normalize_quotient, par_normalize_quotient};

fn normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize-quotient");
    group
        .significance_level(0.05)
        .measurement_time(std::time::Duration::new(10, 0)) // 10 seconds
        .sample_size(30);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let bands = 24;

    for rows in [10_000, 100_000, 1_000_000] {
        let reflectances =
            Array2::from_shape_simple_fn((rows, bands), || rng.gen_range(0.01..1.0_f64));

        let id = BenchmarkId::new("sequential", rows);
        group.bench_with_input(id, &reflectances, |b, reflectances| {
            b.iter_with_large_drop(|| normalize_quotient(reflectances, 4))
        });
        let id = BenchmarkId::new("parallel", rows);
        group.bench_with_input(id, &reflectances, |b, reflectances| {
            b.iter_with_large_drop(|| par_normalize_quotient(reflectances, 4))
        });
    }

    group.finish();
}

criterion_group!(benches, normalize);
criterion_main!(benches);
