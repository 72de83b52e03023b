use cust::error::CudaError;
use thiserror::Error;

/// Errors surfaced by the host-side orchestration. Every variant is fatal
/// for the operation that raised it; callers re-run from scratch rather than
/// resume from a partially updated output buffer.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The driver could not produce a context or command stream.
    #[error("device initialization failed: {0}")]
    Init(#[source] CudaError),

    /// Device memory could not satisfy an allocation.
    #[error("device allocation failed: {0}")]
    Allocation(#[source] CudaError),

    /// A host/device transfer failed.
    #[error("device transfer failed: {0}")]
    Transfer(#[source] CudaError),

    /// The driver rejected the kernel image, or an entry point is missing.
    /// Carries the driver's diagnostic text.
    #[error("kernel compilation failed: {0}")]
    Compilation(String),

    /// A launch was rejected: bad work partition or argument binding.
    #[error("kernel launch failed: {0}")]
    Launch(#[source] CudaError),

    /// The device result diverges from the host reference, reported at the
    /// first diverging element.
    #[error("mismatch at index {index}: expected {expected}, got {actual}")]
    Mismatch {
        index: usize,
        expected: u32,
        actual: u32,
    },

    /// A scalar reduction result diverges from the host reference.
    #[error("sum mismatch: expected {expected}, got {actual}")]
    SumMismatch { expected: u32, actual: u32 },
}
