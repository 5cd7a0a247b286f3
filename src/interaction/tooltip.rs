use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::document::HoverTarget;

/// Absolutely positioned tooltip element, in container coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingTooltip {
    pub marker_index: usize,
    pub left_px: f64,
    pub top_px: f64,
    pub lines: Vec<String>,
}

/// Single-owner tooltip slot: at most one tooltip is alive at a time.
///
/// Entering a marker releases the previous tooltip before creating the new
/// one; leaving releases it.
#[derive(Debug, Default)]
pub struct TooltipController {
    active: Option<FloatingTooltip>,
}

impl TooltipController {
    pub fn hover_enter(
        &mut self,
        marker_index: usize,
        target: &HoverTarget,
        offset_px: (f64, f64),
    ) -> &FloatingTooltip {
        self.release();
        trace!(marker_index, "tooltip created");
        self.active.insert(FloatingTooltip {
            marker_index,
            left_px: target.x + offset_px.0,
            top_px: target.y + offset_px.1,
            lines: target.lines.clone(),
        })
    }

    /// Destroys the live tooltip, if any, and hands it back.
    pub fn hover_leave(&mut self) -> Option<FloatingTooltip> {
        self.release()
    }

    pub fn release(&mut self) -> Option<FloatingTooltip> {
        let released = self.active.take();
        if let Some(tooltip) = &released {
            trace!(marker_index = tooltip.marker_index, "tooltip released");
        }
        released
    }

    #[must_use]
    pub fn active(&self) -> Option<&FloatingTooltip> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
