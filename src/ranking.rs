//! Cumulative gain, discounted cumulative gain and normalised DCG.

use serde::Serialize;
use tracing::debug;

use crate::error::{check_aligned, MetricsError, Result};
use crate::ordering::argsort_descending;

/// Maps a raw relevance grade to the gain it contributes at a rank.
///
/// Any `Fn(f64) -> f64` is accepted where a relevancy function is expected;
/// this alias names the two built-in transforms' shared signature.
pub type RelevancyFunction = fn(f64) -> f64;

/// Uses the relevance grade directly as its gain.
pub fn traditional_relevancy(r: f64) -> f64 {
    r
}

/// `2^r - 1`: widens the gap between low and high relevance grades.
pub fn emphasised_relevancy(r: f64) -> f64 {
    2f64.powf(r) - 1.0
}

/// Predicted and ideal rankings of a set of judged items.
#[derive(Debug, Clone, Serialize)]
pub struct RankingEvaluation {
    /// Ground-truth relevance values in input order.
    relevancies: Vec<f64>,
    /// Indices into `relevancies`, ordered by descending model score.
    predicted_rank: Vec<usize>,
    /// Indices into `relevancies`, ordered by descending relevance.
    perfect_rank: Vec<usize>,
}

impl RankingEvaluation {
    /// Ranks `labels` by `scores` (predicted) and by themselves (perfect).
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::LengthMismatch`] if the slices differ in length.
    pub fn new(scores: &[f64], labels: &[f64]) -> Result<Self> {
        check_aligned(scores, labels)?;

        let predicted_rank = argsort_descending(scores);
        let perfect_rank = argsort_descending(labels);
        debug!(items = labels.len(), "built ranking evaluation");

        Ok(Self {
            relevancies: labels.to_vec(),
            predicted_rank,
            perfect_rank,
        })
    }

    pub fn relevancies(&self) -> &[f64] {
        &self.relevancies
    }

    pub fn predicted_rank(&self) -> &[usize] {
        &self.predicted_rank
    }

    pub fn perfect_rank(&self) -> &[usize] {
        &self.perfect_rank
    }

    /// Sum of the relevance of the top `k` predicted items.
    ///
    /// Pass `relevancies().len()` for no cut-off.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::RankOutOfRange`] unless `1 <= k <= len`.
    pub fn cumulative_gain(&self, k: usize) -> Result<f64> {
        self.check_cutoff(k)?;
        Ok(self.predicted_rank[..k]
            .iter()
            .map(|&i| self.relevancies[i])
            .sum())
    }

    /// DCG of the top `k` predicted items, with gains from `rel`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::RankOutOfRange`] unless `1 <= k <= len`.
    pub fn discounted_cumulative_gain<F>(&self, k: usize, rel: F) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.check_cutoff(k)?;
        Ok(self.discounted_gain(k, &self.predicted_rank, &rel))
    }

    /// DCG of the predicted ranking divided by DCG of the perfect ranking.
    ///
    /// When no item has positive relevance every ordering is perfect and the
    /// result is exactly `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::RankOutOfRange`] unless `1 <= k <= len`.
    pub fn normalised_discounted_cumulative_gain<F>(&self, k: usize, rel: F) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.check_cutoff(k)?;

        let max = self
            .relevancies
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max == 0.0 {
            debug!("no relevant items, ndcg is 1");
            return Ok(1.0);
        }

        Ok(self.discounted_gain(k, &self.predicted_rank, &rel)
            / self.discounted_gain(k, &self.perfect_rank, &rel))
    }

    fn discounted_gain<F>(&self, k: usize, ranking: &[usize], rel: &F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        ranking[..k]
            .iter()
            .enumerate()
            .map(|(i, &v)| rel(self.relevancies[v]) / ((i + 2) as f64).log2())
            .sum()
    }

    fn check_cutoff(&self, k: usize) -> Result<()> {
        let len = self.relevancies.len();
        if k < 1 || k > len {
            return Err(MetricsError::RankOutOfRange { k, len });
        }
        Ok(())
    }
}
