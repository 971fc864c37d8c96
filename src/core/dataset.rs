use serde::Serialize;

use crate::core::{Metric, StateRecord};
use crate::error::{ScatterError, ScatterResult};

/// Immutable, validated collection of state records.
///
/// Construction rejects empty input and malformed rows, so every consumer can
/// rely on: at least one record, non-empty name/abbreviation, all six metrics
/// finite. Iteration order is load order and never changes; render frames
/// depend on it to keep per-state identity stable across selection changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthDataset {
    records: Vec<StateRecord>,
}

impl HealthDataset {
    pub fn new(records: Vec<StateRecord>) -> ScatterResult<Self> {
        if records.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        for (row, record) in records.iter().enumerate() {
            validate_record(row, record)?;
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: empty datasets are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateRecord> {
        self.records.iter()
    }

    /// Unpadded (min, max) of `metric` over every record.
    #[must_use]
    pub fn metric_bounds(&self, metric: Metric) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for record in &self.records {
            let value = record.metric(metric);
            min = min.min(value);
            max = max.max(value);
        }

        (min, max)
    }
}

impl<'a> IntoIterator for &'a HealthDataset {
    type Item = &'a StateRecord;
    type IntoIter = std::slice::Iter<'a, StateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate_record(row: usize, record: &StateRecord) -> ScatterResult<()> {
    if record.state.trim().is_empty() {
        return Err(ScatterError::InvalidRecord {
            row,
            reason: "state name must not be empty".to_owned(),
        });
    }
    if record.abbr.trim().is_empty() {
        return Err(ScatterError::InvalidRecord {
            row,
            reason: "state abbreviation must not be empty".to_owned(),
        });
    }

    for metric in Metric::X_CHOICES.into_iter().chain(Metric::Y_CHOICES) {
        let value = record.metric(metric);
        if !value.is_finite() {
            return Err(ScatterError::InvalidRecord {
                row,
                reason: format!("metric `{metric}` must be finite, got {value}"),
            });
        }
    }

    Ok(())
}
