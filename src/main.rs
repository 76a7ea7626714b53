use std::{fs::File, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rankeval::{chart::LineChart, Dataset, EvaluationReport, Relevancy, ReportOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Score a model's predictions against ground-truth labels.
///
/// Reads a parquet file with a score column and a label column and prints
/// ranking, precision-recall and confusion-matrix metrics.
#[derive(Parser)]
#[command(name = "rankeval", version, about)]
struct Cli {
    /// Parquet file holding scores and labels
    input: PathBuf,

    /// Column with model scores
    #[arg(long, default_value = "score")]
    score_column: String,

    /// Column with ground-truth labels
    #[arg(long, default_value = "label")]
    label_column: String,

    /// Decision threshold for the confusion matrix
    #[arg(short, long, default_value_t = 0.5)]
    threshold: f64,

    /// Rank cut-off for gain metrics and precision@k (default: all rows)
    #[arg(short = 'k', long)]
    cutoff: Option<usize>,

    /// Gain transform for discounted cumulative gain
    #[arg(long, value_enum, default_value_t = RelevancyArg::Traditional)]
    relevancy: RelevancyArg,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write precision-recall chart data as JSON to this path
    #[arg(long)]
    chart_out: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RelevancyArg {
    Traditional,
    Emphasised,
}

impl From<RelevancyArg> for Relevancy {
    fn from(arg: RelevancyArg) -> Self {
        match arg {
            RelevancyArg::Traditional => Relevancy::Traditional,
            RelevancyArg::Emphasised => Relevancy::Emphasised,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "info" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::from_parquet(&cli.input, &cli.score_column, &cli.label_column)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let options = ReportOptions {
        cutoff: cli.cutoff,
        threshold: cli.threshold,
        relevancy: cli.relevancy.into(),
    };
    let report = EvaluationReport::compute(&dataset.scores, &dataset.labels, &options)
        .context("failed to evaluate dataset")?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.format_human());
    }

    if let Some(path) = &cli.chart_out {
        let chart = LineChart::precision_recall(&report.curve);
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(serde_json::to_string_pretty(&chart)?.as_bytes())?;
        info!(path = %path.display(), "wrote chart data");
    }

    Ok(())
}
