//! Error types shared by every metric engine.

use thiserror::Error;

/// Errors raised when a caller breaks an input contract.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Scores and labels are not index-aligned.
    #[error("length mismatch: {scores} scores but {labels} labels")]
    LengthMismatch { scores: usize, labels: usize },

    /// A rank cut-off outside the valid range for the call.
    #[error("cut-off k = {k} is out of range for {len} items")]
    RankOutOfRange { k: usize, len: usize },

    /// Axis labels do not match the grid they annotate.
    #[error("expected {expected} {axis} labels, found {found}")]
    LabelCount {
        axis: &'static str,
        expected: usize,
        found: usize,
    },

    /// A grid row whose length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A named column is not present in the dataset.
    #[error("column `{0}` not found")]
    MissingColumn(String),

    /// A cell that cannot be read as a number.
    #[error("row {row} of column `{column}` is not numeric")]
    InvalidValue { column: String, row: usize },

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Fails with [`MetricsError::LengthMismatch`] unless both slices have the same length.
pub(crate) fn check_aligned(scores: &[f64], labels: &[f64]) -> Result<()> {
    if scores.len() != labels.len() {
        return Err(MetricsError::LengthMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}
