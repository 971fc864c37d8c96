use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Outer drawing-surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins separating the plot area from the viewport edges.
///
/// The bottom and left margins are oversized on purpose: the clickable axis
/// label stacks live there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 30.0,
            bottom: 100.0,
            right: 26.0,
            left: 100.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self) -> ScatterResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("bottom", self.bottom),
            ("right", self.right),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Inner plot rectangle, in viewport pixels.
///
/// Marker coordinates are plot-local; backends translate by `(left, top)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: PlotMargins) -> ScatterResult<Self> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ScatterError::InvalidData(format!(
                "margins leave no plot area: {width}x{height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    /// Pixel range for the x axis, increasing left to right.
    #[must_use]
    pub fn x_range(self) -> PixelRange {
        PixelRange::new(0.0, self.width)
    }

    /// Pixel range for the y axis, inverted for the top-left screen origin.
    #[must_use]
    pub fn y_range(self) -> PixelRange {
        PixelRange::new(self.height, 0.0)
    }
}

/// Directed pixel interval a scale maps onto.
///
/// `start` may exceed `end`; the y axis hands in an inverted range so larger
/// values land closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start != self.end
    }

    /// Signed extent; negative for inverted ranges.
    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}
