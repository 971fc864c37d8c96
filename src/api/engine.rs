use tracing::debug;

use crate::core::{
    AxisDomain, DomainPadding, HealthDataset, LinearScale, Metric, PlotArea, Viewport,
};
use crate::error::ScatterResult;
use crate::interaction::{ChoiceFlags, SelectionChange, SelectionState};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::{RenderStyle, ScatterEngineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` owns the loaded dataset, the selection state, and the
/// derived domains/scales. `select_x`/`select_y` are the only mutation entry
/// points; each runs a complete cycle (state update, domain recompute, scale
/// rebuild, frame build, renderer hand-off) before returning, so observers
/// never see partially updated state. A redundant selection short-circuits
/// before any recompute or renderer call.
pub struct ScatterEngine<R: Renderer> {
    renderer: R,
    dataset: HealthDataset,
    selection: SelectionState,
    viewport: Viewport,
    plot: PlotArea,
    style: RenderStyle,
    x_padding: DomainPadding,
    y_padding: DomainPadding,
    x_domain: AxisDomain,
    y_domain: AxisDomain,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl<R: Renderer> ScatterEngine<R> {
    pub fn new(
        renderer: R,
        dataset: HealthDataset,
        config: ScatterEngineConfig,
    ) -> ScatterResult<Self> {
        let config = config.validate()?;
        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
        let selection = config.selection;

        let x_domain =
            AxisDomain::from_dataset(&dataset, selection.x_metric(), config.x_padding)?;
        let y_domain =
            AxisDomain::from_dataset(&dataset, selection.y_metric(), config.y_padding)?;
        let x_scale = LinearScale::new(x_domain, plot.x_range())?;
        let y_scale = LinearScale::new(y_domain, plot.y_range())?;

        debug!(
            rows = dataset.len(),
            x = %selection.x_metric(),
            y = %selection.y_metric(),
            "scatter engine initialized"
        );

        Ok(Self {
            renderer,
            dataset,
            selection,
            viewport: config.viewport,
            plot,
            style: config.style,
            x_padding: config.x_padding,
            y_padding: config.y_padding,
            x_domain,
            y_domain,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &HealthDataset {
        &self.dataset
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn choice_flags(&self) -> ChoiceFlags {
        self.selection.choice_flags()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    #[must_use]
    pub fn x_domain(&self) -> AxisDomain {
        self.x_domain
    }

    #[must_use]
    pub fn y_domain(&self) -> AxisDomain {
        self.y_domain
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    pub fn map_x_to_pixel(&self, value: f64) -> ScatterResult<f64> {
        self.x_scale.value_to_pixel(value)
    }

    pub fn map_pixel_to_x(&self, pixel: f64) -> ScatterResult<f64> {
        self.x_scale.pixel_to_value(pixel)
    }

    pub fn map_y_to_pixel(&self, value: f64) -> ScatterResult<f64> {
        self.y_scale.value_to_pixel(value)
    }

    pub fn map_pixel_to_y(&self, pixel: f64) -> ScatterResult<f64> {
        self.y_scale.pixel_to_value(pixel)
    }

    /// Puts `metric` on the x axis and runs the recompute/render cycle.
    ///
    /// Re-selecting the active metric is a no-op: domains, scales, and the
    /// renderer are left untouched.
    pub fn select_x(&mut self, metric: Metric) -> ScatterResult<SelectionChange> {
        let change = self.selection.select_x(metric)?;
        if !change.is_changed() {
            return Ok(change);
        }

        self.x_domain = AxisDomain::from_dataset(&self.dataset, metric, self.x_padding)?;
        self.x_scale = LinearScale::new(self.x_domain, self.plot.x_range())?;
        self.render()?;
        Ok(change)
    }

    /// Puts `metric` on the y axis and runs the recompute/render cycle.
    pub fn select_y(&mut self, metric: Metric) -> ScatterResult<SelectionChange> {
        let change = self.selection.select_y(metric)?;
        if !change.is_changed() {
            return Ok(change);
        }

        self.y_domain = AxisDomain::from_dataset(&self.dataset, metric, self.y_padding)?;
        self.y_scale = LinearScale::new(self.y_domain, self.plot.y_range())?;
        self.render()?;
        Ok(change)
    }

    /// Materializes the current scene without touching the renderer.
    pub fn build_render_frame(&self) -> ScatterResult<RenderFrame> {
        build_render_frame(
            &self.dataset,
            self.selection,
            self.x_scale,
            self.y_scale,
            self.viewport,
            self.plot,
            self.style,
        )
    }

    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
