use serde::{Deserialize, Serialize};

use crate::core::{AxisDomain, PixelRange};
use crate::error::{ScatterError, ScatterResult};

/// Affine value-to-pixel mapping for one axis.
///
/// Satisfies `f(domain.min) == range.start` and `f(domain.max) == range.end`,
/// linear in between. Out-of-domain values extrapolate rather than clamp;
/// callers pad the domain instead. Stateless: rebuilt whenever its domain
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: AxisDomain,
    range: PixelRange,
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range: PixelRange) -> ScatterResult<Self> {
        if !range.is_valid() {
            return Err(ScatterError::InvalidData(format!(
                "scale pixel range must be finite and non-degenerate, got [{}, {}]",
                range.start, range.end
            )));
        }

        Ok(Self { domain, range })
    }

    #[must_use]
    pub fn domain(self) -> AxisDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.range
    }

    pub fn value_to_pixel(self, value: f64) -> ScatterResult<f64> {
        if !value.is_finite() {
            return Err(ScatterError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain.min()) / self.domain.span();
        Ok(self.range.start + normalized * self.range.span())
    }

    pub fn pixel_to_value(self, pixel: f64) -> ScatterResult<f64> {
        if !pixel.is_finite() {
            return Err(ScatterError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range.start) / self.range.span();
        Ok(self.domain.min() + normalized * self.domain.span())
    }
}
