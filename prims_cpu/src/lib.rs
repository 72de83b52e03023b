mod pyramid;
mod scan;
mod sum;

pub use pyramid::{stage_count, staged_scan};
pub use scan::sequential_scan;
pub use sum::{block_sums, parallel_sum, sequential_sum};
