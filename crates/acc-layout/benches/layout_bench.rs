use criterion::{black_box, criterion_group, criterion_main, Criterion};

use acc_core::{Acc2Options, NoopObserver, SimilarityMatrix};
use acc_layout::{Acc2Transformer, AccBuilder};

/// Dense symmetric matrix over `n` areas with a deterministic pseudo-random
/// similarity per pair.
fn dense_matrix(n: usize, seed: u64) -> SimilarityMatrix {
    let mut state = seed;
    let mut matrix = SimilarityMatrix::new();
    for i in 0..n {
        for j in (i + 1)..n {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let sim = (state % 1000) as f64 / 1000.0;
            matrix.insert(&format!("a{i:02}"), &format!("a{j:02}"), sim);
        }
    }
    matrix
}

fn bench_build_30(c: &mut Criterion) {
    let local = dense_matrix(30, 0x9E37_79B9_7F4A_7C15);
    let global = dense_matrix(30, 0xD1B5_4A32_D192_ED03);
    let builder = AccBuilder::new(&local, &global);

    c.bench_function("acc_build_30_areas", |b| {
        b.iter(|| black_box(builder.build(&NoopObserver)));
    });
}

fn bench_acc2_30(c: &mut Criterion) {
    let local = dense_matrix(30, 0x9E37_79B9_7F4A_7C15);
    let global = dense_matrix(30, 0xD1B5_4A32_D192_ED03);
    let options = Acc2Options::default()
        .with_max_angle(180.0)
        .with_diameter_range(1.0, 2.0);
    let transformer = Acc2Transformer::new(&local, &global).options(options);

    c.bench_function("acc2_transform_30_areas", |b| {
        b.iter(|| black_box(transformer.transform()));
    });
}

criterion_group!(benches, bench_build_30, bench_acc2_30);
criterion_main!(benches);
