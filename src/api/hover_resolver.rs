use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{Renderer, TooltipPayload};

use super::ScatterEngine;
use super::render_frame_builder::tooltip_payload;

impl<R: Renderer> ScatterEngine<R> {
    /// Resolves the marker under the pointer to its tooltip payload.
    ///
    /// Pointer coordinates are plot-local pixels. A marker is hit when the
    /// pointer falls inside its circle; with overlapping circles the nearest
    /// center wins.
    pub fn hover_at(&self, pointer_x: f64, pointer_y: f64) -> ScatterResult<Option<TooltipPayload>> {
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return Err(ScatterError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let selection = self.selection();
        let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
        for (index, record) in self.dataset().iter().enumerate() {
            let x = self.x_scale().value_to_pixel(record.metric(selection.x_metric()))?;
            let y = self.y_scale().value_to_pixel(record.metric(selection.y_metric()))?;
            let distance = (x - pointer_x).hypot(y - pointer_y);
            if distance <= self.style().marker_radius {
                candidates.push((OrderedFloat(distance), index));
            }
        }

        Ok(candidates
            .into_iter()
            .min_by_key(|candidate| candidate.0)
            .map(|(_, index)| tooltip_payload(&self.dataset().records()[index], selection)))
    }
}
