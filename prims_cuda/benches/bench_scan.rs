use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use itertools::Itertools;
use prims_cuda::scan::PyramidScanner;
use prims_cuda::sum::{device_sum, SumVariant};
use prims_cuda::GpuContext;
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;

const SEED: &[u8; 32] = b"h2Yf7sKW0dQxPz3RbNcVe9gLuT6mAo1J";

pub fn scan_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inclusive scan");
    group.sample_size(10);
    group.sampling_mode(SamplingMode::Flat);

    for n in [1usize << 10, 1 << 16, 1 << 20] {
        let mut rng = Hc128Rng::from_seed(*SEED);
        let xs = (0..n).map(|_| rng.gen_range(0..=1023u32)).collect_vec();

        group.bench_with_input(BenchmarkId::new("Sequential", n), &n, |b, _| {
            let mut ys = vec![0u32; n];
            b.iter(|| prims_cpu::sequential_scan(&xs, &mut ys))
        });

        group.bench_with_input(BenchmarkId::new("StagedCpu", n), &n, |b, _| {
            b.iter(|| prims_cpu::staged_scan(&xs))
        });

        let gpu = GpuContext::new().unwrap();
        let mut scanner = PyramidScanner::new(&gpu, n).unwrap();
        group.bench_with_input(BenchmarkId::new("PyramidGpu", n), &n, |b, _| {
            b.iter(|| scanner.scan(&gpu, &xs).unwrap())
        });
    }
    group.finish();
}

pub fn sum_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Array sum");
    group.sample_size(10);
    group.sampling_mode(SamplingMode::Flat);

    for n in [1usize << 16, 1 << 22] {
        let mut rng = Hc128Rng::from_seed(*SEED);
        let xs = (0..n).map(|_| rng.gen::<u32>()).collect_vec();

        group.bench_with_input(BenchmarkId::new("Sequential", n), &n, |b, _| {
            b.iter(|| prims_cpu::sequential_sum(&xs))
        });

        group.bench_with_input(BenchmarkId::new("Rayon", n), &n, |b, _| {
            b.iter(|| prims_cpu::parallel_sum(&xs))
        });

        let gpu = GpuContext::new().unwrap();
        for variant in [SumVariant::Tree, SumVariant::Blocked, SumVariant::Strided] {
            group.bench_with_input(
                BenchmarkId::new(variant.entry_point(), n),
                &n,
                |b, _| b.iter(|| device_sum(&gpu, &xs, variant).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, scan_comparison, sum_comparison);
criterion_main!(benches);
