use serde::{Deserialize, Serialize};

use crate::core::Metric;
use crate::error::{ScatterError, ScatterResult};

/// One plotted state: circle position plus its in-circle label.
///
/// Coordinates are plot-local pixels. `id` is the record's abbreviation and
/// is the identity a backend should match on when transitioning an existing
/// element to new attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label: String,
    /// Baseline for the label text; offset below the circle center.
    pub label_y: f64,
}

impl PointMarker {
    pub fn validate(&self) -> ScatterResult<()> {
        if self.id.is_empty() || self.label.is_empty() {
            return Err(ScatterError::InvalidData(
                "marker id and label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.label_y.is_finite() {
            return Err(ScatterError::InvalidData(format!(
                "marker `{}` coordinates must be finite",
                self.id
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ScatterError::InvalidData(format!(
                "marker `{}` radius must be finite and > 0",
                self.id
            )));
        }
        Ok(())
    }
}

/// Hover payload for one marker.
///
/// The primary line carries the y metric, the secondary line the x metric,
/// headed by the full state name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub state: String,
    pub primary_metric: Metric,
    pub primary_value: f64,
    pub secondary_metric: Metric,
    pub secondary_value: f64,
}

impl TooltipPayload {
    /// Plain-text rendering for backends without their own tooltip markup.
    #[must_use]
    pub fn text(&self) -> String {
        format!(
            "{}\n{}: {}\n{}: {}",
            self.state,
            self.primary_metric,
            self.primary_value,
            self.secondary_metric,
            self.secondary_value
        )
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if self.state.is_empty() {
            return Err(ScatterError::InvalidData(
                "tooltip state name must not be empty".to_owned(),
            ));
        }
        if !self.primary_value.is_finite() || !self.secondary_value.is_finite() {
            return Err(ScatterError::InvalidData(format!(
                "tooltip values for `{}` must be finite",
                self.state
            )));
        }
        Ok(())
    }
}

/// Tick mark in plot-local pixel space, with the domain value it marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
}

impl AxisTick {
    pub fn validate(self) -> ScatterResult<()> {
        if !self.value.is_finite() || !self.pixel.is_finite() {
            return Err(ScatterError::InvalidData(
                "axis tick must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Clickable axis-label entry with its active flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisChoiceLabel {
    pub metric: Metric,
    pub text: String,
    pub active: bool,
}

impl AxisChoiceLabel {
    pub fn validate(&self) -> ScatterResult<()> {
        if self.text.is_empty() {
            return Err(ScatterError::InvalidData(format!(
                "axis choice `{}` must carry label text",
                self.metric
            )));
        }
        Ok(())
    }
}
