//! Core types for optimization results and per-file outcomes.

use std::fmt;
use std::path::PathBuf;
use serde::Serialize;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Result of a successful in-place optimization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Path of the file that was rewritten
    pub path: PathBuf,
    /// File size before optimization
    pub original_bytes: u64,
    /// File size after the rename, read back from disk
    pub optimized_bytes: u64,
    /// Dimensions as decoded
    pub original_dimensions: Dimensions,
    /// Dimensions as written
    pub final_dimensions: Dimensions,
}

impl OptimizationResult {
    /// Savings as a percentage of the original size, one decimal.
    pub fn savings_percent(&self) -> f64 {
        savings_percent(self.original_bytes, self.optimized_bytes)
    }

    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.final_dimensions
    }
}

/// `(1 - optimized / original) * 100`, rounded to one decimal.
///
/// Negative when the file grew. Zero for an empty original.
pub fn savings_percent(original: u64, optimized: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let ratio = 1.0 - optimized as f64 / original as f64;
    (ratio * 1000.0).round() / 10.0
}

/// What happened to one manifest entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum ItemOutcome {
    Optimized(OptimizationResult),
    /// No file at the manifest path; the optimizer never ran
    Missing { path: PathBuf },
    /// Decode, encode or replace failed; the original is untouched
    Failed { path: PathBuf, reason: String },
}

impl ItemOutcome {
    pub fn result(&self) -> Option<&OptimizationResult> {
        match self {
            Self::Optimized(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
