use serde::{Deserialize, Serialize};

use crate::core::Metric;

/// One dataset row: a state plus its six comparable metrics.
///
/// Field names match the CSV header so rows deserialize directly; numeric
/// columns are coerced from text by the deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
    pub age: f64,
    pub income: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl StateRecord {
    /// Returns the value backing `metric` on this record.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Poverty => self.poverty,
            Metric::Age => self.age,
            Metric::Income => self.income,
            Metric::Healthcare => self.healthcare,
            Metric::Smokes => self.smokes,
            Metric::Obesity => self.obesity,
        }
    }
}
