use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_aligned, Result};

const RULE: &str =
    "------------------------------------------------------------------------------------------------------";

/// Binary confusion matrix for scores cut at a fixed threshold.
///
/// Ratios are derived from the counts on every call. A ratio whose
/// denominator is zero is `NaN`; check with [`f64::is_nan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    observations: usize,
    pos: usize,
    neg: usize,
    true_pos: usize,
    true_neg: usize,
    false_pos: usize,
    false_neg: usize,
}

impl ConfusionMatrix {
    /// Tallies predictions against labels.
    ///
    /// An item is predicted positive when `score >= threshold` and is
    /// actually positive only when its label is exactly `1`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::LengthMismatch`](crate::MetricsError::LengthMismatch)
    /// if the slices differ in length.
    pub fn new(scores: &[f64], labels: &[f64], threshold: f64) -> Result<Self> {
        check_aligned(scores, labels)?;

        let mut matrix = Self::default();
        for (&score, &label) in scores.iter().zip(labels) {
            matrix.observations += 1;
            let predicted = score >= threshold;

            if label == 1.0 {
                matrix.pos += 1;
                if predicted {
                    matrix.true_pos += 1;
                } else {
                    matrix.false_neg += 1;
                }
            } else {
                matrix.neg += 1;
                if predicted {
                    matrix.false_pos += 1;
                } else {
                    matrix.true_neg += 1;
                }
            }
        }

        debug!(
            observations = matrix.observations,
            threshold,
            tp = matrix.true_pos,
            fp = matrix.false_pos,
            "built confusion matrix"
        );
        Ok(matrix)
    }

    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Actual positives.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Actual negatives.
    pub fn neg(&self) -> usize {
        self.neg
    }

    pub fn true_pos(&self) -> usize {
        self.true_pos
    }

    pub fn true_neg(&self) -> usize {
        self.true_neg
    }

    pub fn false_pos(&self) -> usize {
        self.false_pos
    }

    pub fn false_neg(&self) -> usize {
        self.false_neg
    }

    /// `TP / (TP + FP)`
    pub fn precision(&self) -> f64 {
        self.true_pos as f64 / (self.true_pos + self.false_pos) as f64
    }

    /// `TP / (TP + FN)`
    pub fn recall(&self) -> f64 {
        self.true_pos as f64 / (self.true_pos + self.false_neg) as f64
    }

    /// `(TN + TP) / observations`
    pub fn accuracy(&self) -> f64 {
        (self.true_neg + self.true_pos) as f64 / self.observations as f64
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        2.0 * p * r / (p + r)
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Observations = {:<10} |       Predicted No       |       Predicted Yes      |",
            self.observations
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Actual No                 |       TN = {:<10}    |       FP = {:<10}    |",
            self.true_neg, self.false_pos
        )?;
        writeln!(
            f,
            "Actual Yes                |       FN = {:<10}    |       TP = {:<10}    |  Recall = {:.6}",
            self.false_neg,
            self.true_pos,
            self.recall()
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "                                                     |   Precision = {:<10.6} |  Accuracy = {:.6}",
            self.precision(),
            self.accuracy()
        )?;
        writeln!(f, "F1 Score = {:.6}", self.f1())
    }
}
