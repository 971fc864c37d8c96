use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Presentation constants carried into each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub marker_radius: f64,
    /// Vertical offset of the in-circle label baseline from the circle center.
    pub label_y_offset: f64,
    /// Evenly spaced tick marks per axis.
    pub tick_count: usize,
    /// Advisory transition duration handed to animating backends.
    pub transition_ms: u64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_radius: 10.0,
            label_y_offset: 3.0,
            tick_count: 5,
            transition_ms: 1000,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ScatterResult<Self> {
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ScatterError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_y_offset.is_finite() {
            return Err(ScatterError::InvalidData(
                "label offset must be finite".to_owned(),
            ));
        }
        if self.tick_count < 2 {
            return Err(ScatterError::InvalidData(
                "tick count must be at least 2".to_owned(),
            ));
        }
        Ok(self)
    }
}
