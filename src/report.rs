//! Every metric for one dataset, collected into a single value.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::confusion::ConfusionMatrix;
use crate::curve::PrecisionRecallCurve;
use crate::error::Result;
use crate::ranking::{
    emphasised_relevancy, traditional_relevancy, RankingEvaluation, RelevancyFunction,
};

/// Built-in gain transforms, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevancy {
    #[default]
    Traditional,
    Emphasised,
}

impl Relevancy {
    pub fn function(self) -> RelevancyFunction {
        match self {
            Relevancy::Traditional => traditional_relevancy,
            Relevancy::Emphasised => emphasised_relevancy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Rank cut-off; `None` uses every item.
    pub cutoff: Option<usize>,
    /// Decision threshold for the confusion matrix.
    pub threshold: f64,
    pub relevancy: Relevancy,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            cutoff: None,
            threshold: 0.5,
            relevancy: Relevancy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub observations: usize,
    pub cutoff: usize,
    pub threshold: f64,
    pub relevancy: Relevancy,
    /// CG, DCG and NDCG at the cut-off.
    pub ranking: IndexMap<String, f64>,
    /// Scalar summaries of the precision-recall curve.
    pub precision_recall: IndexMap<String, f64>,
    pub confusion: ConfusionMatrix,
    pub curve: PrecisionRecallCurve,
}

impl EvaluationReport {
    /// Runs all three engines over `scores` and `labels`.
    ///
    /// # Errors
    ///
    /// Fails on mismatched lengths, or when the cut-off is outside
    /// `[1, len]` (which includes any empty input).
    pub fn compute(scores: &[f64], labels: &[f64], options: &ReportOptions) -> Result<Self> {
        let cutoff = options.cutoff.unwrap_or(labels.len());
        let rel = options.relevancy.function();

        let evaluation = RankingEvaluation::new(scores, labels)?;
        let mut ranking = IndexMap::new();
        ranking.insert(
            format!("cg@{cutoff}"),
            evaluation.cumulative_gain(cutoff)?,
        );
        ranking.insert(
            format!("dcg@{cutoff}"),
            evaluation.discounted_cumulative_gain(cutoff, rel)?,
        );
        ranking.insert(
            format!("ndcg@{cutoff}"),
            evaluation.normalised_discounted_cumulative_gain(cutoff, rel)?,
        );

        let curve = PrecisionRecallCurve::new(scores, labels)?;
        let mut precision_recall = IndexMap::new();
        precision_recall.insert("average_precision".to_string(), curve.average_precision());
        precision_recall.insert(
            "average_interpolated_precision".to_string(),
            curve.average_interpolated_precision(),
        );
        precision_recall.insert("r_precision".to_string(), curve.r_precision());
        match curve.precision_at(cutoff) {
            Ok(p) => {
                precision_recall.insert(format!("precision@{cutoff}"), p);
            }
            Err(e) => warn!("skipping precision@{cutoff}: {e}"),
        }

        let confusion = ConfusionMatrix::new(scores, labels, options.threshold)?;

        debug!(observations = labels.len(), cutoff, "computed evaluation report");
        Ok(Self {
            observations: labels.len(),
            cutoff,
            threshold: options.threshold,
            relevancy: options.relevancy,
            ranking,
            precision_recall,
            confusion,
            curve,
        })
    }

    /// Plain-text rendering for terminals.
    pub fn format_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} observations, cut-off {}, {:?} relevancy\n",
            self.observations, self.cutoff, self.relevancy
        );
        for (name, value) in self.ranking.iter().chain(&self.precision_recall) {
            let _ = writeln!(out, "{name:<32} {value:.6}");
        }
        let _ = writeln!(out, "\nthreshold {}", self.threshold);
        let _ = write!(out, "{}", self.confusion);
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
