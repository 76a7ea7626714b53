//! Evaluation metrics for ranking and binary classification models.
//!
//! Every engine takes two index-aligned slices, model scores and
//! ground-truth labels, and returns an immutable result:
//!
//! - [`RankingEvaluation`]: cumulative gain, DCG and normalised DCG
//! - [`PrecisionRecallCurve`]: the curve plus average precision,
//!   interpolated average precision, R-precision and precision@k
//! - [`ConfusionMatrix`]: TP/FP/TN/FN counts with precision, recall,
//!   accuracy and F1
//!
//! [`chart`] turns results into plain data for an external renderer and
//! [`report`] runs all three engines over one dataset.

pub mod chart;
pub mod confusion;
pub mod curve;
pub mod dataset;
pub mod error;
pub mod ordering;
pub mod ranking;
pub mod report;

#[cfg(test)]
mod test_utils;

pub use confusion::ConfusionMatrix;
pub use curve::PrecisionRecallCurve;
pub use dataset::Dataset;
pub use error::{MetricsError, Result};
pub use ranking::{
    emphasised_relevancy, traditional_relevancy, RankingEvaluation, RelevancyFunction,
};
pub use report::{EvaluationReport, Relevancy, ReportOptions};
