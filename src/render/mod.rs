mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{AxisChoiceLabel, AxisTick, PointMarker, TooltipPayload};

use crate::error::ScatterResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing and transition timing stay isolated from selection and scale
/// logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()>;
}

#[cfg(feature = "svg-backend")]
mod svg_backend;
#[cfg(feature = "svg-backend")]
pub use svg_backend::SvgRenderer;
