//! Host mirror of the multi-stage pyramid scan.
//!
//! This runs the exact index arithmetic of the `prims_gpu::pyramid` kernels
//! on ordinary slices, one loop iteration per logical work item. It is both
//! the fallback path for machines without a device and the place where the
//! stage/block arithmetic is exercised with checked indexing.

/// Number of stages the scan loop runs for an input of length `n`: one per
/// bit of `n + 1`, which covers the highest set bit of every `i + 1` without
/// special-casing lengths that are not powers of two.
pub fn stage_count(n: usize) -> u32 {
    let mut stage = 0;
    while (n + 1) >> stage > 0 {
        stage += 1;
    }
    stage
}

/// Inclusive scan via the staged reduction pyramid, mirroring the device
/// orchestration: reduce into the scratch level, fold the pre-reduction level
/// into the output, swap, advance the stage.
pub fn staged_scan(xs: &[u32]) -> Vec<u32> {
    let n = xs.len();
    let mut curr_reduced = xs.to_vec();
    let mut tmp_reduced = vec![0u32; n];
    let mut prefix_sums = vec![0u32; n];

    let mut stage: u32 = 0;
    while (n + 1) >> stage > 0 {
        reduce_pairs(&curr_reduced, &mut tmp_reduced, n, (n + 1) >> stage);
        accumulate_prefixes(&curr_reduced, &mut prefix_sums, stage, n);
        std::mem::swap(&mut curr_reduced, &mut tmp_reduced);
        stage += 1;
    }

    prefix_sums
}

/// Twin of the `reduce_pairs` kernel, one iteration per work item.
fn reduce_pairs(xs: &[u32], ys: &mut [u32], n: usize, items: usize) {
    for i in 0..items {
        let left = 2 * i;
        let right = left + 1;
        if right < n {
            ys[i] = xs[left].wrapping_add(xs[right]);
        } else if left < n {
            ys[i] = xs[left];
        }
    }
}

/// Twin of the `accumulate_prefixes` kernel.
fn accumulate_prefixes(xs: &[u32], sums: &mut [u32], stage: u32, n: usize) {
    for i in 0..n {
        let blocks = (i + 1) >> stage;
        if blocks & 1 == 1 {
            sums[i] = sums[i].wrapping_add(xs[blocks - 1]);
        }
    }
}
