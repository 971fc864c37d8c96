use std::fmt::Write as _;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{RenderFrame, Renderer};

/// Renders each frame as a complete standalone SVG document.
///
/// Static output: the advisory transition duration is ignored, and tooltips
/// become `<title>` children so hover text works in any SVG viewer. The
/// class names (`stateCircle`, `stateText`, `aText active|inactive`) are the
/// hooks a host stylesheet is expected to target.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document; empty before the first `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.document = write_document(frame)
            .map_err(|e| ScatterError::InvalidData(format!("svg formatting failed: {e}")))?;
        Ok(())
    }
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let plot = frame.plot;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="chart">"#,
        frame.viewport.width, frame.viewport.height
    )?;
    writeln!(
        out,
        r#"  <g transform="translate({}, {})">"#,
        plot.left, plot.top
    )?;

    // Bottom and left axis lines with their tick marks.
    writeln!(
        out,
        r#"    <g class="axis x-axis" transform="translate(0, {})">"#,
        plot.height
    )?;
    writeln!(out, r#"      <line x1="0" y1="0" x2="{}" y2="0"/>"#, plot.width)?;
    for tick in &frame.x_ticks {
        writeln!(
            out,
            r#"      <g transform="translate({}, 0)"><line y2="6"/><text y="18" text-anchor="middle">{}</text></g>"#,
            tick.pixel,
            format_tick(tick.value)
        )?;
    }
    writeln!(out, "    </g>")?;

    writeln!(out, r#"    <g class="axis y-axis">"#)?;
    writeln!(out, r#"      <line x1="0" y1="0" x2="0" y2="{}"/>"#, plot.height)?;
    for tick in &frame.y_ticks {
        writeln!(
            out,
            r#"      <g transform="translate(0, {})"><line x2="-6"/><text x="-9" dy="0.32em" text-anchor="end">{}</text></g>"#,
            tick.pixel,
            format_tick(tick.value)
        )?;
    }
    writeln!(out, "    </g>")?;

    for (marker, tooltip) in frame.markers.iter().zip(&frame.tooltips) {
        writeln!(
            out,
            r#"    <circle class="stateCircle" cx="{}" cy="{}" r="{}"><title>{}</title></circle>"#,
            marker.x,
            marker.y,
            marker.radius,
            escape_text(&tooltip.text())
        )?;
        writeln!(
            out,
            r#"    <text class="stateText" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            marker.x,
            marker.label_y,
            escape_text(&marker.label)
        )?;
    }

    // Clickable label stacks below and left of the plot.
    writeln!(
        out,
        r#"    <g class="x-labels" transform="translate({}, {})">"#,
        plot.width / 2.0,
        plot.height + 40.0
    )?;
    for (slot, choice) in frame.x_choices.iter().enumerate() {
        writeln!(
            out,
            r#"      <text class="aText {}" data-metric="{}" y="{}" text-anchor="middle">{}</text>"#,
            active_class(choice.active),
            choice.metric,
            slot as f64 * 20.0,
            escape_text(&choice.text)
        )?;
    }
    writeln!(out, "    </g>")?;

    writeln!(
        out,
        r#"    <g class="y-labels" transform="rotate(-90)">"#
    )?;
    for (slot, choice) in frame.y_choices.iter().enumerate() {
        writeln!(
            out,
            r#"      <text class="aText {}" data-metric="{}" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            active_class(choice.active),
            choice.metric,
            -plot.height / 2.0,
            -(plot.left - 65.0) - slot as f64 * 25.0,
            escape_text(&choice.text)
        )?;
    }
    writeln!(out, "    </g>")?;

    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn active_class(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
