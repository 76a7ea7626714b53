//! Loading score/label pairs from parquet files.

use std::{fs::File, path::Path};

use parquet::{
    file::{reader::FileReader, serialized_reader::SerializedFileReader},
    record::Field,
};
use tracing::info;

use crate::error::{MetricsError, Result};

/// Index-aligned model scores and ground-truth labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub scores: Vec<f64>,
    pub labels: Vec<f64>,
}

impl Dataset {
    /// Reads the named score and label columns of a parquet file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, a column is missing, or a cell is
    /// null or non-numeric.
    pub fn from_parquet(path: &Path, score_column: &str, label_column: &str) -> Result<Self> {
        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;

        let fields = reader.metadata().file_metadata().schema().get_fields();
        let position = |name: &str| {
            fields
                .iter()
                .position(|f| f.name() == name)
                .ok_or_else(|| MetricsError::MissingColumn(name.to_string()))
        };
        let score_idx = position(score_column)?;
        let label_idx = position(label_column)?;

        let mut dataset = Dataset::default();
        for (i, row) in reader.get_row_iter(None)?.enumerate() {
            let row = row?;
            let cell = |idx: usize, column: &str| {
                row.get_column_iter()
                    .nth(idx)
                    .and_then(|(_, field)| field_value(field))
                    .ok_or_else(|| MetricsError::InvalidValue {
                        column: column.to_string(),
                        row: i,
                    })
            };
            dataset.scores.push(cell(score_idx, score_column)?);
            dataset.labels.push(cell(label_idx, label_column)?);
        }

        info!(rows = dataset.len(), path = %path.display(), "loaded dataset");
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Reads a numeric or boolean cell as `f64`.
fn field_value(field: &Field) -> Option<f64> {
    match *field {
        Field::Double(v) => Some(v),
        Field::Float(v) => Some(v as f64),
        Field::Long(v) => Some(v as f64),
        Field::Int(v) => Some(v as f64),
        Field::Short(v) => Some(v as f64),
        Field::Byte(v) => Some(v as f64),
        Field::ULong(v) => Some(v as f64),
        Field::UInt(v) => Some(v as f64),
        Field::UShort(v) => Some(v as f64),
        Field::UByte(v) => Some(v as f64),
        Field::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
        _ => None,
    }
}
