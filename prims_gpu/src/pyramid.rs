use cuda_std::{kernel, thread};

/// Work-group (tile) size used for every launch of the scan stage loop. The
/// host rounds the global size up to a multiple of this, so both kernels
/// bounds-check against the true element count.
pub const TILE_SIZE: usize = 128;

/// Builds the next level of the reduction pyramid: `ys[i]` becomes the sum of
/// the element pair `xs[2i]` and `xs[2i + 1]`, or `xs[2i]` alone when the
/// right neighbor falls at or beyond `n` (a missing neighbor contributes
/// zero).
///
/// `n` is the full buffer length, not the logical length of the current
/// level, so entries of `ys` whose pair straddles the level boundary hold
/// stale sums. The accumulation kernel only ever reads pyramid blocks that
/// lie entirely inside the input, so those entries are never observed.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn reduce_pairs(xs: &[u32], ys: *mut u32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let i = bi * bd + ti;

    let left = 2 * i;
    let right = left + 1;
    if right < n {
        *(&mut *ys.add(i)) = xs[left] + xs[right];
    } else if left < n {
        *(&mut *ys.add(i)) = xs[left];
    }
}

/// Folds one pyramid level into the running prefix sums.
///
/// `xs` is the working array *before* this stage's reduction, i.e. pyramid
/// level `stage`, whose entry `j` holds the sum of the input block
/// `[j * 2^stage, (j + 1) * 2^stage)`. For output index `i`, bit `stage` of
/// `i + 1` decides whether this stage contributes, and the contributing block
/// is `((i + 1) >> stage) - 1`. That block always ends at or before index
/// `i`, so it is complete and its pyramid entry is valid.
///
/// A `stage` at or beyond the bit width of `i + 1` shifts the tested bit to
/// zero, making the launch a no-op; the host loop relies on this.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn accumulate_prefixes(xs: &[u32], sums: *mut u32, stage: u32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let i = bi * bd + ti;

    if i >= n {
        return;
    }

    let blocks = (i + 1) >> stage;
    if blocks & 1 == 1 {
        *(&mut *sums.add(i)) += xs[blocks - 1];
    }
}
