use crate::error::ScanError;
use cust::memory::{DeviceCopy, DevicePointer};
use cust::prelude::*;
use std::mem;

/// A block of device-resident memory with host-transfer and peer-swap
/// operations. Exclusively owned by whichever stage of an algorithm
/// currently holds it; never shared across concurrent scans.
pub struct DeviceArray<T: DeviceCopy> {
    buf: DeviceBuffer<T>,
}

impl<T: DeviceCopy> DeviceArray<T> {
    /// Allocates device storage holding a copy of `xs`.
    pub fn from_slice(xs: &[T]) -> Result<Self, ScanError> {
        Ok(Self {
            buf: xs.as_dbuf().map_err(ScanError::Allocation)?,
        })
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Uploads exactly `xs.len()` elements, which must equal `len()`.
    pub fn write_from(&mut self, xs: &[T]) -> Result<(), ScanError> {
        self.buf.copy_from(xs).map_err(ScanError::Transfer)
    }

    /// Downloads exactly `ys.len()` elements, which must equal `len()`.
    pub fn read_into(&self, ys: &mut [T]) -> Result<(), ScanError> {
        self.buf.copy_to(ys).map_err(ScanError::Transfer)
    }

    /// Exchanges the underlying storage handles in O(1); no data moves.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
    }

    pub fn as_device_ptr(&self) -> DevicePointer<T> {
        self.buf.as_device_ptr()
    }
}

impl<T: DeviceCopy + Default + Clone> DeviceArray<T> {
    /// Allocates zero-initialized device storage for `len` elements.
    pub fn zeroed(len: usize) -> Result<Self, ScanError> {
        Self::from_slice(&vec![T::default(); len])
    }

    /// Reallocates for `len` elements, zero-filled, discarding prior
    /// contents.
    pub fn resize(&mut self, len: usize) -> Result<(), ScanError> {
        self.buf = vec![T::default(); len]
            .as_slice()
            .as_dbuf()
            .map_err(ScanError::Allocation)?;
        Ok(())
    }
}
