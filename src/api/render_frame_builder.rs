use crate::core::{HealthDataset, LinearScale, Metric, PlotArea, StateRecord, Viewport};
use crate::error::ScatterResult;
use crate::interaction::SelectionState;
use crate::render::{AxisChoiceLabel, AxisTick, PointMarker, RenderFrame, TooltipPayload};

use super::RenderStyle;

/// Deterministic dataset + selection + scales -> scene transform.
///
/// Emits one marker and one tooltip per record, in dataset order. Order
/// preservation is load-bearing: it lets a backend match updated attributes
/// to persistent visual elements by identity, which is what makes a
/// selection transition continuous instead of a redraw flicker.
pub fn build_render_frame(
    dataset: &HealthDataset,
    selection: SelectionState,
    x_scale: LinearScale,
    y_scale: LinearScale,
    viewport: Viewport,
    plot: PlotArea,
    style: RenderStyle,
) -> ScatterResult<RenderFrame> {
    let style = style.validate()?;

    let mut markers = Vec::with_capacity(dataset.len());
    let mut tooltips = Vec::with_capacity(dataset.len());
    for record in dataset {
        let x = x_scale.value_to_pixel(record.metric(selection.x_metric()))?;
        let y = y_scale.value_to_pixel(record.metric(selection.y_metric()))?;

        markers.push(PointMarker {
            id: record.abbr.clone(),
            x,
            y,
            radius: style.marker_radius,
            label: record.abbr.clone(),
            label_y: y + style.label_y_offset,
        });
        tooltips.push(tooltip_payload(record, selection));
    }

    let frame = RenderFrame {
        viewport,
        plot,
        markers,
        tooltips,
        x_ticks: axis_ticks(x_scale, style.tick_count)?,
        y_ticks: axis_ticks(y_scale, style.tick_count)?,
        x_choices: choice_labels(Metric::X_CHOICES, selection.x_metric()),
        y_choices: choice_labels(Metric::Y_CHOICES, selection.y_metric()),
        transition_ms: style.transition_ms,
    };
    frame.validate()?;
    Ok(frame)
}

/// Hover payload for one record under the given selection.
///
/// The y metric leads; that is the reading order of the tooltip.
pub(super) fn tooltip_payload(record: &StateRecord, selection: SelectionState) -> TooltipPayload {
    TooltipPayload {
        state: record.state.clone(),
        primary_metric: selection.y_metric(),
        primary_value: record.metric(selection.y_metric()),
        secondary_metric: selection.x_metric(),
        secondary_value: record.metric(selection.x_metric()),
    }
}

fn axis_ticks(scale: LinearScale, count: usize) -> ScatterResult<Vec<AxisTick>> {
    let domain = scale.domain();
    let denominator = (count - 1) as f64;

    let mut ticks = Vec::with_capacity(count);
    for index in 0..count {
        let value = domain.min() + domain.span() * (index as f64) / denominator;
        ticks.push(AxisTick {
            value,
            pixel: scale.value_to_pixel(value)?,
        });
    }
    Ok(ticks)
}

fn choice_labels(choices: [Metric; 3], active: Metric) -> Vec<AxisChoiceLabel> {
    choices
        .into_iter()
        .map(|metric| AxisChoiceLabel {
            metric,
            text: metric.axis_label().to_owned(),
            active: metric == active,
        })
        .collect()
}
