use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, Metric};
use crate::error::{ScatterError, ScatterResult};

/// Outcome of a selection request.
///
/// `Unchanged` means the requested metric was already active: no domain
/// recompute and no transition should follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionChange {
    Unchanged,
    ChangedX,
    ChangedY,
}

impl SelectionChange {
    #[must_use]
    pub fn is_changed(self) -> bool {
        !matches!(self, SelectionChange::Unchanged)
    }
}

/// Per-choice activity flags for the clickable axis labels.
///
/// Insertion order follows the declared choice order so serialized snapshots
/// stay stable. Exactly one entry per axis is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceFlags {
    pub x: IndexMap<Metric, bool>,
    pub y: IndexMap<Metric, bool>,
}

/// The currently selected metric pair.
///
/// Replaced wholesale per transition, never partially updated; lives for the
/// whole interactive session with no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    x_metric: Metric,
    y_metric: Metric,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            x_metric: Metric::Poverty,
            y_metric: Metric::Healthcare,
        }
    }
}

impl SelectionState {
    pub fn new(x_metric: Metric, y_metric: Metric) -> ScatterResult<Self> {
        require_axis(x_metric, Axis::X)?;
        require_axis(y_metric, Axis::Y)?;
        Ok(Self { x_metric, y_metric })
    }

    #[must_use]
    pub fn x_metric(self) -> Metric {
        self.x_metric
    }

    #[must_use]
    pub fn y_metric(self) -> Metric {
        self.y_metric
    }

    /// Requests `metric` on the x axis; the y axis is left untouched.
    pub fn select_x(&mut self, metric: Metric) -> ScatterResult<SelectionChange> {
        require_axis(metric, Axis::X)?;
        if metric == self.x_metric {
            return Ok(SelectionChange::Unchanged);
        }

        debug!(from = %self.x_metric, to = %metric, "x selection changed");
        self.x_metric = metric;
        Ok(SelectionChange::ChangedX)
    }

    /// Requests `metric` on the y axis; the x axis is left untouched.
    pub fn select_y(&mut self, metric: Metric) -> ScatterResult<SelectionChange> {
        require_axis(metric, Axis::Y)?;
        if metric == self.y_metric {
            return Ok(SelectionChange::Unchanged);
        }

        debug!(from = %self.y_metric, to = %metric, "y selection changed");
        self.y_metric = metric;
        Ok(SelectionChange::ChangedY)
    }

    /// Derived active/inactive view over both choice sets.
    #[must_use]
    pub fn choice_flags(self) -> ChoiceFlags {
        let x = Metric::X_CHOICES
            .into_iter()
            .map(|choice| (choice, choice == self.x_metric))
            .collect();
        let y = Metric::Y_CHOICES
            .into_iter()
            .map(|choice| (choice, choice == self.y_metric))
            .collect();
        ChoiceFlags { x, y }
    }
}

fn require_axis(metric: Metric, axis: Axis) -> ScatterResult<()> {
    if metric.axis() != axis {
        return Err(ScatterError::MetricAxisMismatch { metric, axis });
    }
    Ok(())
}
