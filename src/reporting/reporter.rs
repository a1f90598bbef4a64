use std::fmt;
use serde::Serialize;
use crate::core::{OptimizationResult, savings_percent};
use crate::processing::BatchSummary;

const MB: f64 = 1024.0 * 1024.0;

/// Aggregate size savings across a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub processed: usize,
    pub missing: usize,
    pub failed: usize,
    pub total_original_bytes: u64,
    pub total_optimized_bytes: u64,
    pub savings_percent: f64,
}

impl Report {
    /// Totals over successful results. Skipped files never appear here.
    pub fn summarize<'a>(results: impl IntoIterator<Item = &'a OptimizationResult>) -> Self {
        let mut report = Self::default();
        for result in results {
            report.processed += 1;
            report.total_original_bytes += result.original_bytes;
            report.total_optimized_bytes += result.optimized_bytes;
        }
        report.savings_percent = savings_percent(report.total_original_bytes, report.total_optimized_bytes);
        report
    }

    /// Like [`Report::summarize`], plus missing and failed counts.
    pub fn from_summary(summary: &BatchSummary) -> Self {
        Self {
            missing: summary.missing_count(),
            failed: summary.failed_count(),
            ..Self::summarize(summary.results())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }

    pub fn total_original_mb(&self) -> f64 {
        self.total_original_bytes as f64 / MB
    }

    pub fn total_optimized_mb(&self) -> f64 {
        self.total_optimized_bytes as f64 / MB
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Optimization Summary ===")?;

        if self.is_empty() {
            writeln!(f, "No images processed")?;
        } else {
            writeln!(f, "- Images optimized: {}", self.processed)?;
            writeln!(f, "- Original size: {:.2} MB", self.total_original_mb())?;
            writeln!(f, "- Optimized size: {:.2} MB", self.total_optimized_mb())?;
            writeln!(f, "- Total savings: {:.1}%", self.savings_percent)?;
        }

        if self.missing > 0 {
            writeln!(f, "- Missing (skipped): {}", self.missing)?;
        }
        if self.failed > 0 {
            writeln!(f, "- Failed: {}", self.failed)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, ItemOutcome};

    fn result(original: u64, optimized: u64) -> OptimizationResult {
        let dims = Dimensions { width: 10, height: 10 };
        OptimizationResult {
            path: "x.jpg".into(),
            original_bytes: original,
            optimized_bytes: optimized,
            original_dimensions: dims,
            final_dimensions: dims,
        }
    }

    #[test]
    fn empty_results_report_nothing_processed() {
        let results: [OptimizationResult; 0] = [];
        let report = Report::summarize(&results);
        assert!(report.is_empty());
        assert!(report.to_string().contains("No images processed"));
    }

    #[test]
    fn totals_and_savings_use_byte_sums() {
        let results = [result(3 * 1024 * 1024, 1024 * 1024), result(1024 * 1024, 1024 * 1024)];
        let report = Report::summarize(&results);

        assert_eq!(report.processed, 2);
        assert_eq!(report.total_original_bytes, 4 * 1024 * 1024);
        assert_eq!(report.savings_percent, 50.0);

        let text = report.to_string();
        assert!(text.contains("Original size: 4.00 MB"));
        assert!(text.contains("Optimized size: 2.00 MB"));
        assert!(text.contains("Total savings: 50.0%"));
    }

    #[test]
    fn summary_counts_skips_separately() {
        let summary = BatchSummary {
            outcomes: vec![
                ItemOutcome::Optimized(result(200, 100)),
                ItemOutcome::Missing { path: "gone.jpg".into() },
                ItemOutcome::Failed { path: "bad.jpg".into(), reason: "decode".into() },
            ],
        };

        let report = Report::from_summary(&summary);

        assert_eq!(report.processed, 1);
        assert_eq!(report.missing, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total_original_bytes, 200);
        assert!(report.to_string().contains("Failed: 1"));
    }
}
