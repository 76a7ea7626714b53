//! Precision-recall curves and their scalar summaries.
//!
//! A curve is traced by walking the items from the highest score down and
//! stops at the first rank where every positive has been recovered. The
//! stored arrays run from that rank back up to the top-scored item, followed
//! by the anchor point `(precision = 1, recall = 0)`, so index
//! `len - 1 - k` holds the value at rank `k`.

use serde::Serialize;
use tracing::debug;

use crate::error::{check_aligned, MetricsError, Result};
use crate::ordering::{argsort, sorted};

/// Number of fixed recall levels used for interpolated average precision.
const RECALL_LEVELS: usize = 11;

#[derive(Debug, Clone, Serialize)]
pub struct PrecisionRecallCurve {
    /// Precision at each rank, anchor last.
    precision: Vec<f64>,
    /// Recall at each rank, anchor last.
    recall: Vec<f64>,
    /// The highest scores, ascending, one per recorded rank.
    thresholds: Vec<f64>,
    /// Count of labels greater than zero.
    positives: usize,
}

impl PrecisionRecallCurve {
    /// Builds the curve for `scores` judged against `labels`.
    ///
    /// Any label greater than zero counts as positive, so graded relevance
    /// labels may be passed as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::LengthMismatch`] if the slices differ in length.
    pub fn new(scores: &[f64], labels: &[f64]) -> Result<Self> {
        check_aligned(scores, labels)?;

        let positives = labels.iter().filter(|&&l| l > 0.0).count();
        if positives == 0 {
            debug!(items = labels.len(), "no positive labels, curve is the anchor only");
            return Ok(Self {
                precision: vec![1.0],
                recall: vec![0.0],
                thresholds: Vec::new(),
                positives,
            });
        }

        let order = argsort(scores);
        let mut precision = vec![0.0; order.len()];
        let mut recall = vec![0.0; order.len()];

        let mut hits = 0usize;
        let mut steps = 0;
        for (k, &i) in order.iter().rev().enumerate() {
            if labels[i] > 0.0 {
                hits += 1;
            }
            recall[k] = hits as f64 / positives as f64;
            precision[k] = hits as f64 / (k + 1) as f64;
            steps = k + 1;
            if recall[k] == 1.0 {
                break;
            }
        }

        // Drop the ranks below the one where the last positive was found.
        precision.truncate(steps);
        recall.truncate(steps);

        precision.reverse();
        recall.reverse();

        precision.push(1.0);
        recall.push(0.0);

        let ascending = sorted(scores);
        let thresholds = ascending[ascending.len() - steps..].to_vec();

        debug!(
            items = labels.len(),
            positives, steps, "built precision-recall curve"
        );

        Ok(Self {
            precision,
            recall,
            thresholds,
            positives,
        })
    }

    pub fn precision(&self) -> &[f64] {
        &self.precision
    }

    pub fn recall(&self) -> &[f64] {
        &self.recall
    }

    /// Scores at which the curve was sampled. One shorter than
    /// [`precision`](Self::precision): the anchor has no threshold.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn positives(&self) -> usize {
        self.positives
    }

    /// `(recall, precision)` pairs in storage order, anchor last.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.recall.iter().copied().zip(self.precision.iter().copied())
    }

    /// Area under the precision-recall step curve.
    ///
    /// Recall does not increase along the stored arrays, so each step is
    /// weighted by `recall[i] - recall[i + 1]`.
    pub fn average_precision(&self) -> f64 {
        self.recall
            .windows(2)
            .zip(&self.precision)
            .fold(0.0, |sum, (r, p)| sum + (r[0] - r[1]) * p)
    }

    /// Mean interpolated precision over the recall levels 0.0, 0.1, ..., 1.0.
    pub fn average_interpolated_precision(&self) -> f64 {
        let sum: f64 = (0..RECALL_LEVELS)
            .map(|i| self.interpolated_precision_at(i as f64 / 10.0))
            .sum();
        sum / RECALL_LEVELS as f64
    }

    /// Precision at the rank equal to the number of positives.
    pub fn r_precision(&self) -> f64 {
        self.precision[self.precision.len() - 1 - self.positives]
    }

    /// Precision of the top `k` items. `k = 0` is the anchor, `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::RankOutOfRange`] if `k` is past the rank at
    /// which the curve stopped.
    pub fn precision_at(&self, k: usize) -> Result<f64> {
        let ranks = self.precision.len() - 1;
        if k > ranks {
            return Err(MetricsError::RankOutOfRange { k, len: ranks });
        }
        Ok(self.precision[ranks - k])
    }

    /// Highest precision among points with recall of at least `r`, or `0.0`
    /// if there are none.
    pub fn interpolated_precision_at(&self, r: f64) -> f64 {
        self.points()
            .filter(|&(recall, _)| recall >= r)
            .map(|(_, precision)| precision)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::datasets;

    fn curves() -> Vec<PrecisionRecallCurve> {
        datasets()
            .iter()
            .map(|(s, l)| PrecisionRecallCurve::new(s, l).unwrap())
            .collect()
    }

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len(), "{got:?} != {want:?}");
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-12, "{got:?} != {want:?}");
        }
    }

    #[test]
    fn curve_shape_known() {
        let expected: [(&[f64], &[f64], &[f64]); 5] = [
            (
                &[2.0 / 3.0, 0.5, 1.0, 1.0],
                &[1.0, 0.5, 0.5, 0.0],
                &[0.35, 0.4, 0.8],
            ),
            (
                &[0.5, 1.0 / 3.0, 0.5, 0.0, 1.0],
                &[1.0, 0.5, 0.5, 0.0, 0.0],
                &[0.35, 0.4, 0.8, 0.85],
            ),
            (
                &[0.5, 0.4, 0.5, 1.0 / 3.0, 0.5, 0.0, 1.0],
                &[1.0, 2.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0, 0.0],
                &[0.02, 0.1, 0.35, 0.4, 0.8, 0.85],
            ),
            (&[1.0], &[0.0], &[]),
            (&[1.0], &[0.0], &[]),
        ];

        for (curve, (precision, recall, thresholds)) in curves().iter().zip(expected) {
            assert_close(curve.precision(), precision);
            assert_close(curve.recall(), recall);
            assert_close(curve.thresholds(), thresholds);
        }
    }

    #[test]
    fn curves_end_at_anchor() {
        for curve in curves() {
            let n = curve.precision().len();
            assert_eq!(n, curve.recall().len());
            assert_eq!(curve.thresholds().len(), n - 1);
            assert_eq!(curve.precision()[n - 1], 1.0);
            assert_eq!(curve.recall()[n - 1], 0.0);
            for (r, p) in curve.points() {
                assert!((0.0..=1.0).contains(&r));
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn average_precision_known() {
        let expected = [0.8333333333333333, 0.5, 0.5, 0.0, 0.0];
        for (curve, want) in curves().iter().zip(expected) {
            let ap = curve.average_precision();
            assert!((ap - want).abs() < 1e-12, "ap {ap} != {want}");
        }
    }

    #[test]
    fn average_precision_is_one_when_positives_lead() {
        let curve =
            PrecisionRecallCurve::new(&[0.9, 0.8, 0.3, 0.1], &[1.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(curve.average_precision(), 1.0);
        // stops as soon as the second positive is found
        assert_eq!(curve.thresholds(), &[0.8, 0.9]);
    }

    #[test]
    fn average_interpolated_precision_known() {
        let expected = [0.848485, 0.545455, 0.545455, 0.090909, 0.090909];
        for (curve, want) in curves().iter().zip(expected) {
            let aip = curve.average_interpolated_precision();
            assert!((aip - want).abs() < 1e-6, "aip {aip} != {want}");
        }
    }

    #[test]
    fn precision_at_k_known() {
        let expected: [&[f64]; 5] = [
            &[1.0, 1.0, 0.5, 2.0 / 3.0],
            &[1.0, 0.0, 0.5, 1.0 / 3.0, 0.5],
            &[1.0, 0.0, 0.5, 1.0 / 3.0, 0.5, 0.4, 0.5],
            &[1.0],
            &[1.0],
        ];
        for (curve, want) in curves().iter().zip(expected) {
            for (k, &p) in want.iter().enumerate() {
                assert!((curve.precision_at(k).unwrap() - p).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn precision_at_past_curve_end() {
        let curves = curves();
        assert!(matches!(
            curves[0].precision_at(4),
            Err(MetricsError::RankOutOfRange { k: 4, len: 3 })
        ));
        assert!(curves[3].precision_at(1).is_err());
    }

    #[test]
    fn r_precision_known() {
        let expected = [0.5, 0.5, 1.0 / 3.0, 1.0, 1.0];
        for (curve, want) in curves().iter().zip(expected) {
            assert!((curve.r_precision() - want).abs() < 1e-12);
        }
        assert_eq!(curves()[0].positives(), 2);
    }

    #[test]
    fn interpolated_precision_at_known() {
        let expected: [[f64; 11]; 3] = [
            [
                1.0,
                1.0,
                1.0,
                1.0,
                1.0,
                1.0,
                2.0 / 3.0,
                2.0 / 3.0,
                2.0 / 3.0,
                2.0 / 3.0,
                2.0 / 3.0,
            ],
            [1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
            [1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
        ];
        let curves = curves();
        for (curve, want) in curves.iter().zip(expected) {
            for (r, &p) in want.iter().enumerate() {
                let got = curve.interpolated_precision_at(r as f64 / 10.0);
                assert!((got - p).abs() < 1e-12, "P@r={r}: {got} != {p}");
            }
        }
        for curve in &curves[3..] {
            assert_eq!(curve.interpolated_precision_at(0.0), 1.0);
            for r in 1..=10 {
                assert_eq!(curve.interpolated_precision_at(r as f64 / 10.0), 0.0);
            }
        }
    }

    #[test]
    fn graded_labels_count_as_positive() {
        let curve =
            PrecisionRecallCurve::new(&[0.9, 0.2, 0.5], &[2.0, 0.0, 3.0]).unwrap();
        assert_eq!(curve.positives(), 2);
        assert_eq!(curve.average_precision(), 1.0);
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            PrecisionRecallCurve::new(&[0.1], &[1.0, 0.0]),
            Err(MetricsError::LengthMismatch { .. })
        ));
    }
}
