use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::render::{AxisChoiceLabel, AxisTick, PointMarker, TooltipPayload};

/// Backend-agnostic scene for one scatter draw pass.
///
/// `markers` and `tooltips` are parallel and keep dataset order, so backends
/// can transition persistent elements by index or by `PointMarker::id`
/// instead of recreating them. Marker and tick coordinates are plot-local;
/// `plot` locates that space inside `viewport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub markers: Vec<PointMarker>,
    pub tooltips: Vec<TooltipPayload>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_choices: Vec<AxisChoiceLabel>,
    pub y_choices: Vec<AxisChoiceLabel>,
    /// Advisory duration for backends that animate attribute changes.
    pub transition_ms: u64,
}

impl RenderFrame {
    pub fn validate(&self) -> ScatterResult<()> {
        if !self.viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.markers.len() != self.tooltips.len() {
            return Err(ScatterError::InvalidData(format!(
                "markers ({}) and tooltips ({}) must pair up",
                self.markers.len(),
                self.tooltips.len()
            )));
        }

        for marker in &self.markers {
            marker.validate()?;
        }
        for tooltip in &self.tooltips {
            tooltip.validate()?;
        }
        for tick in self.x_ticks.iter().chain(&self.y_ticks) {
            tick.validate()?;
        }
        for choice in self.x_choices.iter().chain(&self.y_choices) {
            choice.validate()?;
        }
        for (axis, choices) in [("x", &self.x_choices), ("y", &self.y_choices)] {
            let active = choices.iter().filter(|choice| choice.active).count();
            if active != 1 {
                return Err(ScatterError::InvalidData(format!(
                    "{axis} axis must have exactly one active choice, got {active}"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
