// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod reporting;
pub mod commands;
pub mod cli;

// Public exports for external consumers
pub use self::core::{Batch, ItemOutcome, Manifest, OptimizationResult, Profile};
pub use utils::{OptimizerError, OptimizerResult};
pub use reporting::Report;
pub use commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
