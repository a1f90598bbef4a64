//! Entry points invoked by the binary.
//!
//! - [`optimize_assets`]: back up, optimize the manifest, build the report

mod optimize;

pub use optimize::*;
