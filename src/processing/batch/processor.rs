use std::path::PathBuf;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::core::{ItemOutcome, Manifest, OptimizationResult};
use crate::processing::codec::optimize_entry;
use crate::utils::file_exists;

/// Outcomes of a full manifest run, in manifest order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchSummary {
    /// Successful results only.
    pub fn results(&self) -> impl Iterator<Item = &OptimizationResult> {
        self.outcomes.iter().filter_map(ItemOutcome::result)
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_missing()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

/// Walks a manifest against a public directory, one file at a time.
pub struct BatchProcessor {
    public_dir: PathBuf,
}

impl BatchProcessor {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self { public_dir: public_dir.into() }
    }

    /// Optimizes every existing manifest file, group by group, in declared order.
    ///
    /// Missing files are recorded and skipped. A failing file is recorded and
    /// the run continues with the next entry.
    pub async fn run_all(&self, manifest: &Manifest) -> BatchSummary {
        info!("Processing {} manifest entries in {} batches", manifest.len(), manifest.groups().len());

        let mut summary = BatchSummary::default();

        for group in manifest.groups() {
            let profile = group.batch.profile();
            info!("── Batch '{}' ({} files) ──", group.batch, group.paths.len());

            for entry in group.entries() {
                let path = entry.resolve(&self.public_dir);

                if !file_exists(&path).await {
                    debug!("Skipping missing file {}", path.display());
                    summary.outcomes.push(ItemOutcome::Missing { path });
                    continue;
                }

                summary.outcomes.push(optimize_entry(path, profile).await);
            }
        }

        let failed = summary.failed_count();
        if failed > 0 {
            warn!(
                "Batch processing completed with {} failed files out of {}",
                failed,
                manifest.len()
            );
        } else {
            info!("Batch processing completed: {} files optimized", summary.results().count());
        }

        summary
    }
}
