use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_marker_count: usize,
    pub last_active_x: Option<String>,
    pub last_active_y: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_marker_count = frame.markers.len();
        self.last_active_x = frame
            .x_choices
            .iter()
            .find(|choice| choice.active)
            .map(|choice| choice.metric.to_string());
        self.last_active_y = frame
            .y_choices
            .iter()
            .find(|choice| choice.active)
            .map(|choice| choice.metric.to_string());
        Ok(())
    }
}
