//! The full optimize pass: backup, manifest run, report.

use std::path::PathBuf;
use serde::Serialize;
use tracing::{debug, info};
use crate::core::Manifest;
use crate::processing::{BatchProcessor, BatchSummary};
use crate::reporting::Report;
use crate::utils::{
    BackupOutcome,
    OptimizerResult,
    ensure_backup,
    validate_manifest,
    validate_public_dir,
};

/// Where the pass reads and backs up assets.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub public_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            backup_dir: PathBuf::from("public-backup"),
        }
    }
}

/// Everything a finished pass produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub backup: BackupOutcome,
    pub summary: BatchSummary,
    pub report: Report,
}

/// Backs up the public directory, then optimizes every manifest file in order.
///
/// # Errors
/// Only fatal conditions are returned: an invalid manifest profile, a missing
/// public directory, or any failure creating the backup. Per-file failures are
/// recorded in the summary instead.
pub async fn optimize_assets(options: &RunOptions, manifest: &Manifest) -> OptimizerResult<RunOutput> {
    debug!("Running with {:?}", options);
    validate_manifest(manifest)?;
    validate_public_dir(&options.public_dir)?;

    let source = options.public_dir.clone();
    let backup_dir = options.backup_dir.clone();
    let backup = tokio::task::spawn_blocking(move || ensure_backup(&source, &backup_dir))
        .await
        .map_err(|e| crate::utils::OptimizerError::io(format!("Backup task panicked: {e}")))??;

    let summary = BatchProcessor::new(&options.public_dir).run_all(manifest).await;
    let report = Report::from_summary(&summary);
    info!(
        "Optimized {} files ({} missing, {} failed)",
        report.processed, report.missing, report.failed
    );

    Ok(RunOutput { backup, summary, report })
}
