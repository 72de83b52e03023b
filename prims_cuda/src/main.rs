use itertools::Itertools;
use prims_cuda::scan::PyramidScanner;
use prims_cuda::sum::{device_sum, SumVariant};
use prims_cuda::vec_add::vector_add;
use prims_cuda::{verify, GpuContext, ScanError};
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;
use std::error::Error;
use std::time::{Duration, Instant};

const SEED: &[u8; 32] = b"h2Yf7sKW0dQxPz3RbNcVe9gLuT6mAo1J";
const BENCH_ITERS: u32 = 10;

pub fn main() -> Result<(), Box<dyn Error>> {
    let gpu = GpuContext::new()?;

    run_vector_add(&gpu)?;
    run_sums(&gpu)?;
    run_scans(&gpu)?;
    Ok(())
}

fn run_vector_add(gpu: &GpuContext) -> Result<(), Box<dyn Error>> {
    println!("______________________________________________");
    let n = 10_000_000usize;
    println!("Vector add, n={}", n);

    let mut rng = Hc128Rng::from_seed(*SEED);
    let xs = (0..n).map(|_| rng.gen::<f32>()).collect_vec();
    let ys = (0..n).map(|_| rng.gen::<f32>()).collect_vec();

    let mut zs = Vec::new();
    let now = Instant::now();
    for _ in 0..BENCH_ITERS {
        zs = vector_add(gpu, &xs, &ys)?;
    }
    let avg = now.elapsed() / BENCH_ITERS;
    println!("GPU: {:.2?} per run, {:.2} millions/s", avg, rate(n, avg));

    for (i, ((&x, &y), &z)) in xs.iter().zip(ys.iter()).zip(zs.iter()).enumerate() {
        if z != x + y {
            return Err(format!("vector add diverges at index {}: {} != {}", i, z, x + y).into());
        }
    }
    Ok(())
}

fn run_sums(gpu: &GpuContext) -> Result<(), Box<dyn Error>> {
    println!("______________________________________________");
    let n = 10_000_000usize;
    println!("Array sum, n={}", n);

    let mut rng = Hc128Rng::from_seed(*SEED);
    let xs = (0..n)
        .map(|_| rng.gen_range(0..=u32::MAX / n as u32))
        .collect_vec();

    let mut reference_sum = 0;
    let now = Instant::now();
    for _ in 0..BENCH_ITERS {
        reference_sum = prims_cpu::sequential_sum(&xs);
    }
    let avg = now.elapsed() / BENCH_ITERS;
    println!("CPU:          {:.2?} per run, {:.2} millions/s", avg, rate(n, avg));

    let now = Instant::now();
    for _ in 0..BENCH_ITERS {
        let sum = prims_cpu::parallel_sum(&xs);
        expect_sum(reference_sum, sum)?;
    }
    let avg = now.elapsed() / BENCH_ITERS;
    println!("CPU parallel: {:.2?} per run, {:.2} millions/s", avg, rate(n, avg));

    for variant in [SumVariant::Tree, SumVariant::Blocked, SumVariant::Strided] {
        let now = Instant::now();
        for _ in 0..BENCH_ITERS {
            let sum = device_sum(gpu, &xs, variant)?;
            expect_sum(reference_sum, sum)?;
        }
        let avg = now.elapsed() / BENCH_ITERS;
        println!(
            "GPU {:12} {:.2?} per run, {:.2} millions/s",
            format!("{}:", variant.entry_point()),
            avg,
            rate(n, avg)
        );
    }
    Ok(())
}

fn run_scans(gpu: &GpuContext) -> Result<(), Box<dyn Error>> {
    let mut rng = Hc128Rng::from_seed(*SEED);
    let max_n = 1usize << 20;

    let mut n = 2usize;
    while n <= max_n {
        println!("______________________________________________");
        // Keep the total below the wraparound point so a mismatch is a real
        // divergence, not an overflow artifact.
        let values_range = 1023u32.min(u32::MAX / n as u32);
        println!("Prefix sum, n={}, values in [0; {}]", n, values_range);

        let xs = (0..n).map(|_| rng.gen_range(0..=values_range)).collect_vec();

        let mut reference = vec![0u32; n];
        let now = Instant::now();
        for _ in 0..BENCH_ITERS {
            prims_cpu::sequential_scan(&xs, &mut reference);
        }
        let avg = now.elapsed() / BENCH_ITERS;
        println!("CPU:        {:.2?} per scan, {:.2} millions/s", avg, rate(n, avg));

        let now = Instant::now();
        for _ in 0..BENCH_ITERS {
            let staged = prims_cpu::staged_scan(&xs);
            verify::verify(&reference, &staged)?;
        }
        let avg = now.elapsed() / BENCH_ITERS;
        println!("CPU staged: {:.2?} per scan, {:.2} millions/s", avg, rate(n, avg));

        let mut scanner = PyramidScanner::new(gpu, n)?;
        let mut result = Vec::new();
        let now = Instant::now();
        for _ in 0..BENCH_ITERS {
            result = scanner.scan(gpu, &xs)?;
        }
        let avg = now.elapsed() / BENCH_ITERS;
        println!("GPU:        {:.2?} per scan, {:.2} millions/s", avg, rate(n, avg));

        verify::verify(&reference, &result)?;
        n *= 2;
    }
    Ok(())
}

fn expect_sum(expected: u32, actual: u32) -> Result<(), ScanError> {
    if expected != actual {
        return Err(ScanError::SumMismatch { expected, actual });
    }
    Ok(())
}

fn rate(n: usize, avg: Duration) -> f64 {
    n as f64 / 1e6 / avg.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_sum_accepts_equal_totals() {
        assert!(expect_sum(42, 42).is_ok());
    }

    #[test]
    fn expect_sum_reports_both_totals() {
        let err = expect_sum(42, 41).unwrap_err();
        match err {
            ScanError::SumMismatch { expected, actual } => {
                assert_eq!((expected, actual), (42, 41));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
