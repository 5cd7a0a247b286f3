use serde::{Deserialize, Serialize};

use crate::core::path::PathData;
use crate::error::{ChartError, ChartResult};

/// Point on a circle; 0 degrees is 12 o'clock and angles grow clockwise.
#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let radians = (angle_deg - 90.0).to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// Angular span of one wedge, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSweep {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl ArcSweep {
    #[must_use]
    pub fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    #[must_use]
    pub fn sweep_deg(self) -> f64 {
        self.end_deg - self.start_deg
    }

    #[must_use]
    pub fn large_arc(self) -> bool {
        self.sweep_deg() > 180.0
    }
}

/// Ring placement shared by all wedges of one donut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl WedgeGeometry {
    /// Ring whose thickness is `thickness_ratio` of the outer radius.
    #[must_use]
    pub fn ring(cx: f64, cy: f64, outer_radius: f64, thickness_ratio: f64) -> Self {
        Self {
            cx,
            cy,
            outer_radius,
            inner_radius: outer_radius * (1.0 - thickness_ratio),
        }
    }

    /// Radius of the centerline, used for solid-ring strokes.
    #[must_use]
    pub fn mid_radius(self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    #[must_use]
    pub fn thickness(self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// Annular wedge: outer arc clockwise, inner arc back, closed.
///
/// Only strictly partial sweeps are drawable; full and empty rings are
/// rendered as solid circles by the caller.
pub fn donut_wedge_path(geometry: WedgeGeometry, sweep: ArcSweep) -> ChartResult<PathData> {
    let span = sweep.sweep_deg();
    if !span.is_finite() || span <= 0.0 || span >= 360.0 {
        return Err(ChartError::InvalidDomain(format!(
            "wedge sweep must be inside (0, 360), got {span}"
        )));
    }

    let WedgeGeometry {
        cx,
        cy,
        outer_radius,
        inner_radius,
    } = geometry;
    let large_arc = sweep.large_arc();

    let (outer_start_x, outer_start_y) = polar_to_cartesian(cx, cy, outer_radius, sweep.start_deg);
    let (outer_end_x, outer_end_y) = polar_to_cartesian(cx, cy, outer_radius, sweep.end_deg);
    let (inner_end_x, inner_end_y) = polar_to_cartesian(cx, cy, inner_radius, sweep.end_deg);
    let (inner_start_x, inner_start_y) = polar_to_cartesian(cx, cy, inner_radius, sweep.start_deg);

    Ok(PathData::new()
        .move_to(outer_start_x, outer_start_y)
        .arc_to(outer_radius, large_arc, true, outer_end_x, outer_end_y)
        .line_to(inner_end_x, inner_end_y)
        .arc_to(inner_radius, large_arc, false, inner_start_x, inner_start_y)
        .close())
}
