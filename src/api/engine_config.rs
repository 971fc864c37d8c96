use serde::{Deserialize, Serialize};

use crate::core::{DomainPadding, PlotArea, PlotMargins, Viewport};
use crate::error::ScatterResult;
use crate::interaction::SelectionState;

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "DomainPadding::x_default")]
    pub x_padding: DomainPadding,
    #[serde(default = "DomainPadding::y_default")]
    pub y_padding: DomainPadding,
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub style: RenderStyle,
}

impl ScatterEngineConfig {
    /// Creates a config with default margins, pads, selection, and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            x_padding: DomainPadding::x_default(),
            y_padding: DomainPadding::y_default(),
            selection: SelectionState::default(),
            style: RenderStyle::default(),
        }
    }

    /// The 500x400 viewport the dashboard ships with.
    #[must_use]
    pub fn dashboard() -> Self {
        Self::new(Viewport::new(500, 400))
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_paddings(mut self, x_padding: DomainPadding, y_padding: DomainPadding) -> Self {
        self.x_padding = x_padding;
        self.y_padding = y_padding;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ScatterResult<Self> {
        PlotArea::from_viewport(self.viewport, self.margins)?;
        self.x_padding.validate()?;
        self.y_padding.validate()?;
        self.style.validate()?;
        Ok(self)
    }
}
