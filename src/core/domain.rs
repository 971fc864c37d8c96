use serde::{Deserialize, Serialize};

use crate::core::{HealthDataset, Metric};
use crate::error::{ScatterError, ScatterResult};

/// Additive padding applied below/above the raw metric min/max.
///
/// Pads are fixed per axis, not per metric: income shares the same absolute
/// pad as poverty. Intentional quirk of the dashboard this engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    pub low: f64,
    pub high: f64,
}

impl DomainPadding {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Historic x-axis pads.
    #[must_use]
    pub fn x_default() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Historic y-axis pads.
    #[must_use]
    pub fn y_default() -> Self {
        Self::new(0.5, 2.0)
    }

    pub fn validate(self) -> ScatterResult<Self> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low < 0.0 || self.high < 0.0 {
            return Err(ScatterError::InvalidDomain(
                "domain pads must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Padded `[min, max]` display range for one axis.
///
/// Recomputed from the dataset whenever the selection changes; never cached
/// across selections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    min: f64,
    max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> ScatterResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScatterError::InvalidDomain(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min >= max {
            return Err(ScatterError::InvalidDomain(format!(
                "domain must be strictly increasing, got [{min}, {max}]"
            )));
        }

        Ok(Self { min, max })
    }

    /// Padded domain of `metric` over the whole dataset.
    ///
    /// A single-record dataset yields a degenerate raw span; the pads must
    /// widen it or this fails with `InvalidDomain`.
    pub fn from_dataset(
        dataset: &HealthDataset,
        metric: Metric,
        padding: DomainPadding,
    ) -> ScatterResult<Self> {
        let padding = padding.validate()?;
        let (min, max) = dataset.metric_bounds(metric);
        Self::new(min - padding.low, max + padding.high)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
