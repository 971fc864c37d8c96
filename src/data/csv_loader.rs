//! CSV dataset loading.
//!
//! The one-time load is the only I/O in the crate. Failures are fail-stop:
//! a malformed row aborts the load instead of being skipped, so NaN
//! positions can never reach a render frame.

use std::io;
use std::path::Path;

use tracing::{error, info};

use crate::core::{HealthDataset, Metric, StateRecord};
use crate::error::{ScatterError, ScatterResult};

/// Non-metric columns every dataset must carry.
const IDENTITY_COLUMNS: [&str; 2] = ["state", "abbr"];

/// Loads and validates the dataset from a CSV file on disk.
pub fn load_csv_path(path: impl AsRef<Path>) -> ScatterResult<HealthDataset> {
    let path = path.as_ref();
    let result = std::fs::File::open(path)
        .map_err(ScatterError::from)
        .and_then(load_csv_reader);

    match &result {
        Ok(dataset) => info!(path = %path.display(), rows = dataset.len(), "loaded health dataset"),
        Err(err) => error!(path = %path.display(), error = %err, "failed to load health dataset"),
    }

    result
}

/// Loads and validates the dataset from any CSV byte stream.
///
/// The header row must contain `state`, `abbr`, and all six metric columns;
/// numeric fields may arrive as text and are coerced during deserialization.
pub fn load_csv_reader<R: io::Read>(reader: R) -> ScatterResult<HealthDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    validate_header(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize::<StateRecord>().enumerate() {
        let record = result.map_err(|e| ScatterError::InvalidRecord {
            row,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    HealthDataset::new(records)
}

fn validate_header(headers: &csv::StringRecord) -> ScatterResult<()> {
    let has = |name: &str| headers.iter().any(|header| header == name);

    for column in IDENTITY_COLUMNS {
        if !has(column) {
            return Err(ScatterError::MissingColumn { column });
        }
    }
    for metric in Metric::X_CHOICES.into_iter().chain(Metric::Y_CHOICES) {
        if !has(metric.column_name()) {
            return Err(ScatterError::MissingColumn {
                column: metric.column_name(),
            });
        }
    }

    Ok(())
}
