use crate::buffer::DeviceArray;
use crate::context::GpuContext;
use crate::error::ScanError;
use cust::prelude::*;
use prims_gpu::sum::{BLOCK_SIZE, VALUES_PER_ITEM};

/// Which device reduction kernel to run. All variants leave one partial sum
/// per block; the host folds the partials.
#[derive(Clone, Copy, Debug)]
pub enum SumVariant {
    /// One element per work item, shared-memory tree fold.
    Tree,
    /// `VALUES_PER_ITEM` contiguous elements per work item (uncoalesced).
    Blocked,
    /// `VALUES_PER_ITEM` elements per work item at a whole-grid stride.
    Strided,
}

impl SumVariant {
    pub fn entry_point(self) -> &'static str {
        match self {
            SumVariant::Tree => "sum_tree",
            SumVariant::Blocked => "sum_blocked",
            SumVariant::Strided => "sum_strided",
        }
    }

    /// Number of blocks launched, which is also the number of partial sums.
    fn block_count(self, n: usize) -> usize {
        match self {
            SumVariant::Tree => div_ceil(n, BLOCK_SIZE),
            SumVariant::Blocked | SumVariant::Strided => {
                div_ceil(n, BLOCK_SIZE * VALUES_PER_ITEM)
            }
        }
    }
}

/// Wrapping sum of `xs` on the device.
pub fn device_sum(gpu: &GpuContext, xs: &[u32], variant: SumVariant) -> Result<u32, ScanError> {
    let n = xs.len();
    if n == 0 {
        return Ok(0);
    }

    let dev_xs = DeviceArray::from_slice(xs)?;
    let blocks = variant.block_count(n);
    let partials = DeviceArray::<u32>::zeroed(blocks)?;

    let kernel = gpu.function(variant.entry_point())?;
    let stream = &gpu.stream;
    unsafe {
        launch!(
            kernel<<<blocks as u32, BLOCK_SIZE as u32, 0, stream>>>(
                dev_xs.as_device_ptr(),
                dev_xs.len(),
                partials.as_device_ptr(),
                n
            )
        )
    }
    .map_err(ScanError::Launch)?;
    gpu.synchronize()?;

    let mut host_partials = vec![0u32; blocks];
    partials.read_into(&mut host_partials)?;
    Ok(prims_cpu::sequential_sum(&host_partials))
}

fn div_ceil(numerator: usize, denominator: usize) -> usize {
    (numerator + denominator - 1) / denominator
}
