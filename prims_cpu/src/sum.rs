use rayon::prelude::*;

/// Elements per rayon work unit; large enough that the fold, not the task
/// scheduling, dominates.
const PARALLEL_CHUNK: usize = 64 * 1024;

/// Wrapping sum of all elements.
pub fn sequential_sum(xs: &[u32]) -> u32 {
    xs.iter().fold(0u32, |acc, &x| acc.wrapping_add(x))
}

/// Multi-core wrapping sum; the host-side counterpart of the device
/// reduction variants.
pub fn parallel_sum(xs: &[u32]) -> u32 {
    xs.par_chunks(PARALLEL_CHUNK)
        .map(sequential_sum)
        .reduce(|| 0, u32::wrapping_add)
}

/// Per-block wrapping sums with block length `block_len`; the last block may
/// be short. This is the partial-sum layout the device reduction kernels
/// produce.
pub fn block_sums(xs: &[u32], block_len: usize) -> Vec<u32> {
    xs.chunks(block_len).map(sequential_sum).collect()
}
