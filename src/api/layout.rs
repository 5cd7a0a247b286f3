use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Donut,
}

/// Geometry of one render pass. Built once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub container_width_px: f64,
    pub canvas_height_px: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub plot_width_px: f64,
    pub plot_height_px: f64,
    /// Intervals per axis: `label_count + 1` ticks are drawn.
    pub label_count: usize,
    pub is_compact: bool,
    pub font_size_px: f64,
    pub point_radius_px: f64,
    /// Distance of the rotated value-axis title left of the plot.
    pub axis_title_offset_px: f64,
}

/// Resolves the width actually laid out: zero or unmeasurable widths fall
/// back to the configured constant.
#[must_use]
pub fn effective_width(measured_width_px: f64, config: &LayoutConfig) -> f64 {
    if measured_width_px.is_finite() && measured_width_px > 0.0 {
        measured_width_px
    } else {
        config.fallback_width_px
    }
}

/// Computes responsive geometry for one chart instance.
///
/// The line chart derives its height from the width (capped), and switches
/// to compact margins, fonts and tick counts below the threshold. The donut
/// uses a fixed square canvas whatever the container width.
pub fn compute_layout(
    measured_width_px: f64,
    kind: ChartKind,
    config: &LayoutConfig,
) -> ChartResult<LayoutGeometry> {
    let width = effective_width(measured_width_px, config);
    let is_compact = width < config.compact_threshold_px;

    let geometry = match kind {
        ChartKind::Line => {
            let margins = if is_compact {
                config.compact_margins
            } else {
                config.regular_margins
            };
            let height = (width * config.aspect_ratio).min(config.max_height_px);
            LayoutGeometry {
                container_width_px: width,
                canvas_height_px: height,
                margin_top: margins.top,
                margin_right: margins.right,
                margin_bottom: margins.bottom,
                margin_left: margins.left,
                plot_width_px: width - margins.left - margins.right,
                plot_height_px: height - margins.top - margins.bottom,
                label_count: if is_compact {
                    config.compact_tick_count
                } else {
                    config.regular_tick_count
                },
                is_compact,
                font_size_px: if is_compact {
                    config.compact_font_px
                } else {
                    config.regular_font_px
                },
                point_radius_px: if is_compact {
                    config.compact_point_radius_px
                } else {
                    config.regular_point_radius_px
                },
                axis_title_offset_px: if is_compact {
                    config.compact_axis_title_offset_px
                } else {
                    config.regular_axis_title_offset_px
                },
            }
        }
        ChartKind::Donut => LayoutGeometry {
            container_width_px: width,
            canvas_height_px: config.donut_canvas_px,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            plot_width_px: config.donut_canvas_px,
            plot_height_px: config.donut_canvas_px,
            label_count: 2,
            is_compact: false,
            font_size_px: config.regular_font_px,
            point_radius_px: config.regular_point_radius_px,
            axis_title_offset_px: 0.0,
        },
    };

    if !(geometry.plot_width_px > 0.0 && geometry.plot_height_px > 0.0) {
        return Err(ChartError::InvalidDomain(format!(
            "plot area {}x{} is not positive",
            geometry.plot_width_px, geometry.plot_height_px
        )));
    }
    Ok(geometry)
}
