//! In-place optimizer for a single image.
//!
//! Decoding and encoding are CPU-bound, so [`optimize_entry`] hands each file
//! to `tokio::task::spawn_blocking` and awaits it before the caller moves on.
//! Files are never processed concurrently.

use std::fs;
use std::path::{Path, PathBuf};
use image::ImageReader;
use tracing::{debug, info, warn};

use crate::core::{Dimensions, ItemOutcome, OptimizationResult, Profile};
use crate::utils::{OptimizerError, OptimizerResult, extract_filename, get_file_size, replace_atomically};

use super::formats::encode_image;
use super::resize::apply_resize;

const MB: f64 = 1024.0 * 1024.0;

/// Optimizes the image at `path` in place and reports the size change.
///
/// The file is replaced via a `.tmp` sibling and a rename, so on any error the
/// original bytes are still on disk and no temp file is left behind. The
/// caller is expected to have checked that `path` exists.
pub fn optimize(path: &Path, profile: &Profile) -> OptimizerResult<OptimizationResult> {
    let original_bytes = get_file_size(path)?;
    let name = extract_filename(path);

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| OptimizerError::decode(format!("Failed to load '{}': {e}", path.display())))?;

    let original_dimensions = Dimensions { width: image.width(), height: image.height() };
    debug!("Loaded '{}': {}", name, original_dimensions);

    let image = apply_resize(image, profile.max_width);
    let final_dimensions = Dimensions { width: image.width(), height: image.height() };
    if final_dimensions != original_dimensions {
        debug!("Resized '{}': {} -> {}", name, original_dimensions, final_dimensions);
    }

    let encoded = encode_image(&image, profile)?;
    replace_atomically(path, |tmp| {
        fs::write(tmp, &encoded).map_err(|e| OptimizerError::io(format!(
            "Failed to write {}: {e}", tmp.display()
        )))
    })?;

    let result = OptimizationResult {
        path: path.to_path_buf(),
        original_bytes,
        optimized_bytes: get_file_size(path)?,
        original_dimensions,
        final_dimensions,
    };

    info!("{}", progress_line(&name, &result));

    Ok(result)
}

fn progress_line(name: &str, result: &OptimizationResult) -> String {
    format!(
        "✓ {}: {:.2} MB -> {:.2} MB ({} -> {}, {:.1}% saved)",
        name,
        result.original_bytes as f64 / MB,
        result.optimized_bytes as f64 / MB,
        result.original_dimensions,
        result.final_dimensions,
        result.savings_percent()
    )
}

/// Runs [`optimize`] on the blocking pool and folds any error into the outcome.
pub async fn optimize_entry(path: PathBuf, profile: Profile) -> ItemOutcome {
    let task_path = path.clone();
    let joined = tokio::task::spawn_blocking(move || optimize(&task_path, &profile)).await;

    let failure = match joined {
        Ok(Ok(result)) => return ItemOutcome::Optimized(result),
        Ok(Err(e)) => e.to_string(),
        Err(e) => format!("Task panicked: {e}"),
    };

    warn!("✗ {}: {}", extract_filename(&path), failure);
    ItemOutcome::Failed { path, reason: failure }
}
