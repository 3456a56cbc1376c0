use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use par_radix_sort::parallel_sort;

const BATCH_SIZE: usize = 1_000_000;

pub fn bench_sort(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let uniform = (0..BATCH_SIZE).map(|_| rng.r#gen()).collect::<Vec<i32>>();

    let small_values = (0..BATCH_SIZE)
        .map(|_| rng.gen_range(0..1000))
        .collect::<Vec<i32>>();

    let top_byte_spread = (0..BATCH_SIZE)
        .map(|_| rng.gen_range(0..256) << 24)
        .collect::<Vec<i32>>();

    let mut group = c.benchmark_group("sort_i32");
    group.throughput(Throughput::Bytes((BATCH_SIZE * size_of::<i32>()) as u64));

    group.bench_function("standard_unstable", |b| {
        b.iter_batched_ref(|| uniform.clone(), |data| data.sort_unstable(), BatchSize::LargeInput)
    });
    group.bench_function("radix_uniform", |b| {
        b.iter_batched_ref(|| uniform.clone(), |data| parallel_sort(data), BatchSize::LargeInput)
    });
    group.bench_function("radix_small_values", |b| {
        b.iter_batched_ref(
            || small_values.clone(),
            |data| parallel_sort(data),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("radix_top_byte_spread", |b| {
        b.iter_batched_ref(
            || top_byte_spread.clone(),
            |data| parallel_sort(data),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
