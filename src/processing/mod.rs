pub mod batch;
pub mod codec;

pub use batch::{BatchProcessor, BatchSummary};
pub use codec::{optimize, optimize_entry};
