use aliasdraw::AliasTable;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_dist(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    let mut weights: Vec<f64> = (0..n).map(|_| 0.1 + rng.random::<f64>()).collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let dist = gen_dist(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new_n={n}"), |b| {
            b.iter(|| black_box(AliasTable::new(black_box(&dist))).unwrap());
        });
    }
    group.finish();
}

fn bench_table_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let table = AliasTable::new(&gen_dist(n)).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("sample_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= table.sample(rng);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("sample_batch_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(1001),
                |rng| black_box(table.sample_batch(rng, DRAWS_PER_ITER).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(alias, bench_table_build, bench_table_sample);
criterion_main!(alias);
