use crate::buffer::DeviceArray;
use crate::context::GpuContext;
use crate::error::ScanError;
use crate::work::WorkSize;
use cust::prelude::*;
use prims_gpu::vec_add::TILE_SIZE;

/// Elementwise `xs[i] + ys[i]` on the device. The slices must be the same
/// length.
pub fn vector_add(gpu: &GpuContext, xs: &[f32], ys: &[f32]) -> Result<Vec<f32>, ScanError> {
    let n = xs.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let dev_xs = DeviceArray::from_slice(xs)?;
    let dev_ys = DeviceArray::from_slice(ys)?;
    let dev_zs = DeviceArray::<f32>::zeroed(n)?;

    let kernel = gpu.function("add_f32")?;
    let stream = &gpu.stream;
    let items = WorkSize::new(TILE_SIZE as u32, n as u32);
    unsafe {
        launch!(
            kernel<<<items.grid(), items.tile, 0, stream>>>(
                dev_xs.as_device_ptr(),
                dev_xs.len(),
                dev_ys.as_device_ptr(),
                dev_ys.len(),
                dev_zs.as_device_ptr(),
                n
            )
        )
    }
    .map_err(ScanError::Launch)?;
    gpu.synchronize()?;

    let mut zs = vec![0f32; n];
    dev_zs.read_into(&mut zs)?;
    Ok(zs)
}
