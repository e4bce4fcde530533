use crate::dom::{Element, PointerEvent};

/// Widths at or below this are never applied during a drag.
pub const MIN_RESIZE_WIDTH: f64 = 50.0;

/// One free-resize drag; origin and limits are captured at pointer down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    start_x: f64,
    start_width: f64,
    max_width: f64,
}

impl ResizeSession {
    pub fn start(origin: &PointerEvent, start_width: f64, max_width: f64) -> Self {
        Self {
            start_x: origin.client_x,
            start_width,
            max_width,
        }
    }

    /// Applies the requested width if it falls strictly between the minimum
    /// and the container width; out-of-range moves leave the last width.
    pub fn update(&self, event: &PointerEvent, block: &mut Element) {
        let new_width = self.start_width + (event.client_x - self.start_x);
        if new_width > MIN_RESIZE_WIDTH && new_width < self.max_width {
            block.set_style("width", format!("{new_width}px"));
        }
    }

    /// Returns the width the block settled on, if measurable and positive.
    pub fn end(self, block: &Element) -> Option<u32> {
        let width = block.computed_width()?;
        (width > 0.0).then_some(width as u32)
    }
}
