//! End-to-end tests through the real kernels. All of them need a CUDA
//! device, so they are ignored by default; run with
//! `cargo test -- --ignored`.

use itertools::Itertools;
use prims_cuda::scan::{pyramid_scan, PyramidScanner};
use prims_cuda::sum::{device_sum, SumVariant};
use prims_cuda::vec_add::vector_add;
use prims_cuda::GpuContext;
use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;

const SEED: &[u8; 32] = b"h2Yf7sKW0dQxPz3RbNcVe9gLuT6mAo1J";

fn context() -> GpuContext {
    GpuContext::new().expect("CUDA device required")
}

fn random_input(n: usize, rng: &mut impl Rng) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(0..=1023)).collect_vec()
}

#[test]
#[ignore = "requires a CUDA device"]
fn scan_matches_reference_across_lengths() {
    let gpu = context();
    let mut rng = Hc128Rng::from_seed(*SEED);

    for n in [1usize, 2, 3, 5, 8, 9, 31, 1023, 1024, 1025, 1 << 16] {
        let xs = random_input(n, &mut rng);
        let mut expected = vec![0u32; n];
        prims_cpu::sequential_scan(&xs, &mut expected);
        assert_eq!(pyramid_scan(&gpu, &xs).unwrap(), expected, "n={}", n);
    }
}

#[test]
#[ignore = "requires a CUDA device"]
fn scan_concrete_scenarios() {
    let gpu = context();
    assert_eq!(
        pyramid_scan(&gpu, &[1, 2, 3, 4, 5]).unwrap(),
        [1, 3, 6, 10, 15]
    );
    assert_eq!(pyramid_scan(&gpu, &[7]).unwrap(), [7]);
    assert_eq!(pyramid_scan(&gpu, &[0u32; 8]).unwrap(), [0u32; 8]);
}

#[test]
#[ignore = "requires a CUDA device"]
fn repeated_scans_are_deterministic_and_reuse_state() {
    let gpu = context();
    let mut rng = Hc128Rng::from_seed(*SEED);
    let xs = random_input(1023, &mut rng);

    let mut scanner = PyramidScanner::new(&gpu, xs.len()).unwrap();
    let first = scanner.scan(&gpu, &xs).unwrap();
    let second = scanner.scan(&gpu, &xs).unwrap();
    assert_eq!(first, second);

    // Shrinking the input resizes the device arrays.
    let shorter = random_input(100, &mut rng);
    let mut expected = vec![0u32; shorter.len()];
    prims_cpu::sequential_scan(&shorter, &mut expected);
    assert_eq!(scanner.scan(&gpu, &shorter).unwrap(), expected);
}

#[test]
#[ignore = "requires a CUDA device"]
fn sum_variants_match_reference() {
    let gpu = context();
    let mut rng = Hc128Rng::from_seed(*SEED);

    for n in [1usize, 127, 128, 129, 100_000] {
        let xs = (0..n).map(|_| rng.gen::<u32>()).collect_vec();
        let expected = prims_cpu::sequential_sum(&xs);
        for variant in [SumVariant::Tree, SumVariant::Blocked, SumVariant::Strided] {
            assert_eq!(
                device_sum(&gpu, &xs, variant).unwrap(),
                expected,
                "n={} variant={:?}",
                n,
                variant
            );
        }
    }
}

#[test]
#[ignore = "requires a CUDA device"]
fn vector_add_matches_elementwise_reference() {
    let gpu = context();
    let mut rng = Hc128Rng::from_seed(*SEED);

    let n = 100_003usize;
    let xs = (0..n).map(|_| rng.gen::<f32>()).collect_vec();
    let ys = (0..n).map(|_| rng.gen::<f32>()).collect_vec();

    let zs = vector_add(&gpu, &xs, &ys).unwrap();
    for i in 0..n {
        assert_eq!(zs[i], xs[i] + ys[i], "i={}", i);
    }
}
