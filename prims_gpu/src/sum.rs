use crate::step::div_step;
use cuda_std::{kernel, shared_array, thread};

/// Kernel launch block size for every reduction variant. Must be a power of
/// two so that the shared-memory tree fold stays balanced.
pub const BLOCK_SIZE: usize = 128;

/// How many input elements each work item of the looping variants
/// accumulates before the tree fold.
pub const VALUES_PER_ITEM: usize = 64;

/// Shared-memory tree fold of one block's `BLOCK_SIZE` values, leaving the
/// block total in `buf[0]`.
unsafe fn block_fold(buf: *mut u32, ti: usize) {
    for stride in div_step(BLOCK_SIZE / 2, 2).take_while(|&s| s > 0) {
        thread::sync_threads();
        if ti < stride {
            *(&mut *buf.add(ti)) += *buf.add(ti + stride);
        }
    }
}

/// One element per work item, then a tree fold; `partials[b]` receives the
/// total of block `b`. The host folds the partials.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn sum_tree(xs: &[u32], partials: *mut u32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let i = bi * bd + ti;

    let buf = shared_array![u32; BLOCK_SIZE];
    *(&mut *buf.add(ti)) = if i < n { xs[i] } else { 0 };
    block_fold(buf, ti);

    if ti == 0 {
        *(&mut *partials.add(bi)) = *buf.add(0);
    }
}

/// Each work item accumulates `VALUES_PER_ITEM` contiguous elements before
/// the tree fold. Reads are uncoalesced; this is the baseline for the
/// strided variant.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn sum_blocked(xs: &[u32], partials: *mut u32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let i = bi * bd + ti;

    let mut accumulator = 0u32;
    let start = i * VALUES_PER_ITEM;
    let mut k = start;
    while k < start + VALUES_PER_ITEM && k < n {
        accumulator += xs[k];
        k += 1;
    }

    let buf = shared_array![u32; BLOCK_SIZE];
    *(&mut *buf.add(ti)) = accumulator;
    block_fold(buf, ti);

    if ti == 0 {
        *(&mut *partials.add(bi)) = *buf.add(0);
    }
}

/// Each work item accumulates at a whole-grid stride, so that neighboring
/// items always read neighboring elements, then the tree fold.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn sum_strided(xs: &[u32], partials: *mut u32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let gd = thread::grid_dim_x() as usize;

    let mut accumulator = 0u32;
    let mut k = bi * bd + ti;
    while k < n {
        accumulator += xs[k];
        k += gd * bd;
    }

    let buf = shared_array![u32; BLOCK_SIZE];
    *(&mut *buf.add(ti)) = accumulator;
    block_fold(buf, ti);

    if ti == 0 {
        *(&mut *partials.add(bi)) = *buf.add(0);
    }
}
