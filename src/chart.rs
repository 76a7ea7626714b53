//! Plain-data hand-off for chart renderers.
//!
//! Nothing here draws. These types capture exactly what a renderer needs
//! (points, titles, cell values, axis labels) so drawing stays outside the
//! crate and never touches the metric engines.

use serde::{Deserialize, Serialize};

use crate::curve::PrecisionRecallCurve;
use crate::error::{MetricsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A titled XY line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
}

impl LineChart {
    /// Recall on x, precision on y, average precision in the title.
    pub fn precision_recall(curve: &PrecisionRecallCurve) -> Self {
        Self {
            title: format!(
                "Precision-recall Curve, AP={:.6}",
                curve.average_precision()
            ),
            x_label: "Recall".into(),
            y_label: "Precision".into(),
            points: curve.points().map(|(x, y)| Point { x, y }).collect(),
        }
    }
}

/// A rectangular grid of numeric cells.
pub trait Grid {
    /// `(rows, cols)`
    fn dims(&self) -> (usize, usize);

    fn value(&self, row: usize, col: usize) -> f64;
}

/// Row-major grid storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DenseGrid {
    /// Builds a grid from equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::RaggedRow`] if a row's length differs from
    /// the first row's.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MetricsError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }
}

impl Grid for DenseGrid {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}

/// Snapshot of a grid ready for heat-map rendering.
///
/// `min` and `max` skip `NaN` cells; renderers draw those transparent.
/// Both are `NaN` when no cell has a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub cells: Vec<Vec<f64>>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub min: f64,
    pub max: f64,
}

impl Heatmap {
    /// `x_labels` name the columns, `y_labels` the rows.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::LabelCount`] when a label list does not match
    /// the grid's dimensions.
    pub fn new<G: Grid + ?Sized>(
        grid: &G,
        x_labels: Vec<String>,
        y_labels: Vec<String>,
    ) -> Result<Self> {
        let (rows, cols) = grid.dims();
        if x_labels.len() != cols {
            return Err(MetricsError::LabelCount {
                axis: "x",
                expected: cols,
                found: x_labels.len(),
            });
        }
        if y_labels.len() != rows {
            return Err(MetricsError::LabelCount {
                axis: "y",
                expected: rows,
                found: y_labels.len(),
            });
        }

        let cells: Vec<Vec<f64>> = (0..rows)
            .map(|r| (0..cols).map(|c| grid.value(r, c)).collect())
            .collect();

        let finite = cells.iter().flatten().copied().filter(|v| !v.is_nan());
        let (min, max) = finite.fold((f64::NAN, f64::NAN), |(lo, hi), v| (lo.min(v), hi.max(v)));

        Ok(Self {
            cells,
            x_labels,
            y_labels,
            min,
            max,
        })
    }
}
