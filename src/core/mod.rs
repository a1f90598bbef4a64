//! Core types shared across the optimizer.
//!
//! - [`Profile`] and [`Batch`]: the batch → profile configuration table
//! - [`Manifest`]: the declared, ordered list of files to optimize
//! - [`OptimizationResult`] and [`ItemOutcome`]: what happened to each file

mod manifest;
mod profile;
mod types;

pub use manifest::{Manifest, ManifestEntry, ManifestGroup};
pub use profile::{Batch, Profile, DEFAULT_PNG_COMPRESSION};
pub use types::{Dimensions, ItemOutcome, OptimizationResult, savings_percent};
