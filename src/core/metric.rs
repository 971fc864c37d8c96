use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Chart axis a metric is allowed to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Closed set of dataset metrics offered by the dashboard.
///
/// The x axis chooses among demographic metrics, the y axis among health
/// outcomes; the split is fixed, not data-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Poverty,
    Age,
    Income,
    Healthcare,
    Smokes,
    Obesity,
}

impl Metric {
    /// X-axis choices, in presentation order.
    pub const X_CHOICES: [Metric; 3] = [Metric::Poverty, Metric::Age, Metric::Income];

    /// Y-axis choices, in presentation order.
    pub const Y_CHOICES: [Metric; 3] = [Metric::Healthcare, Metric::Smokes, Metric::Obesity];

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Metric::Poverty | Metric::Age | Metric::Income => Axis::X,
            Metric::Healthcare | Metric::Smokes | Metric::Obesity => Axis::Y,
        }
    }

    /// CSV column name carrying this metric.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Poverty => "poverty",
            Metric::Age => "age",
            Metric::Income => "income",
            Metric::Healthcare => "healthcare",
            Metric::Smokes => "smokes",
            Metric::Obesity => "obesity",
        }
    }

    /// Human-readable axis label shown next to the chart.
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Poverty => "In Poverty (%)",
            Metric::Age => "Age (Median)",
            Metric::Income => "Household Income (Median)",
            Metric::Healthcare => "Lacks Healthcare (%)",
            Metric::Smokes => "Smokes (%)",
            Metric::Obesity => "Obese (%)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Metric {
    type Err = ScatterError;

    fn from_str(input: &str) -> ScatterResult<Self> {
        match input {
            "poverty" => Ok(Metric::Poverty),
            "age" => Ok(Metric::Age),
            "income" => Ok(Metric::Income),
            "healthcare" => Ok(Metric::Healthcare),
            "smokes" => Ok(Metric::Smokes),
            "obesity" => Ok(Metric::Obesity),
            other => Err(ScatterError::UnknownMetric(other.to_owned())),
        }
    }
}
