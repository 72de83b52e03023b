use cuda_std::{kernel, thread};

/// Work-group size for the elementwise kernel.
pub const TILE_SIZE: usize = 128;

/// Elementwise `zs[i] = xs[i] + ys[i]` for `i < n`.
#[kernel]
#[allow(improper_ctypes_definitions, clippy::missing_safety_doc)]
pub unsafe fn add_f32(xs: &[f32], ys: &[f32], zs: *mut f32, n: usize) {
    let ti = thread::thread_idx_x() as usize;
    let bi = thread::block_idx_x() as usize;
    let bd = thread::block_dim_x() as usize;
    let i = bi * bd + ti;

    if i < n {
        *(&mut *zs.add(i)) = xs[i] + ys[i];
    }
}
