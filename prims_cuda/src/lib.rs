mod buffer;
mod context;
mod error;
pub mod scan;
pub mod sum;
pub mod vec_add;
pub mod verify;
mod work;

pub use buffer::DeviceArray;
pub use context::GpuContext;
pub use error::ScanError;
pub use work::WorkSize;
