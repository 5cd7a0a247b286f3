use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    CumulativePoint, PathData, XpRecord, accumulate, datetime_to_unix_seconds, time_scale,
    time_series_from_records, value_scale,
};
use crate::document::{HoverTarget, RenderedChart};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, GroupPrimitive, LinePrimitive, PathPrimitive, SvgNode, SvgRootPrimitive,
    TextAnchor, TextPrimitive, make_node,
};

use super::axis_ticks::axis_ticks;
use super::label_format::{
    format_date_label, format_increment, format_tooltip_date, format_value_label, format_xp,
};
use super::{ChartKind, LayoutConfig, LayoutGeometry, LineChartStyle, compute_layout};

/// Lifecycle of a line chart in its container.
///
/// `Built` only exists inside a render pass, between construction and
/// attachment; `Stale` means the container width moved away from the width
/// the chart was built at and a debounced rebuild is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineChartState {
    Empty,
    Built,
    Attached,
    Stale,
}

/// Domain extrema of a cumulative series.
///
/// Taken from the first and last points, so they are only exact for
/// ascending input with non-negative increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesDomain {
    pub min_time: f64,
    pub max_time: f64,
    pub max_value: f64,
}

impl SeriesDomain {
    pub fn from_points(points: &[CumulativePoint]) -> ChartResult<Self> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Err(ChartError::EmptyInput);
        };
        Ok(Self {
            min_time: datetime_to_unix_seconds(first.timestamp),
            max_time: datetime_to_unix_seconds(last.timestamp),
            max_value: last.cumulative_value,
        })
    }
}

/// Pixel position of every point inside the plot area.
pub fn project_points(
    points: &[CumulativePoint],
    domain: SeriesDomain,
    layout: &LayoutGeometry,
) -> ChartResult<Vec<(f64, f64)>> {
    points
        .iter()
        .map(|point| {
            let x = time_scale(
                datetime_to_unix_seconds(point.timestamp),
                domain.min_time,
                domain.max_time,
                layout.plot_width_px,
            )?;
            let y = value_scale(
                point.cumulative_value,
                domain.max_value,
                layout.plot_height_px,
            )?;
            Ok((x, y))
        })
        .collect()
}

/// Single polyline: `M` to the first point, `L` to each following one.
#[must_use]
pub fn polyline_path(projected: &[(f64, f64)]) -> PathData {
    let mut points = projected.iter();
    let Some(&(x0, y0)) = points.next() else {
        return PathData::new();
    };
    points.fold(PathData::new().move_to(x0, y0), |path, &(x, y)| {
        path.line_to(x, y)
    })
}

/// Full pipeline from raw records to an attachable chart.
pub fn build_line_chart(
    records: &[XpRecord],
    measured_width_px: f64,
    layout_config: &LayoutConfig,
    style: &LineChartStyle,
) -> ChartResult<RenderedChart> {
    if records.is_empty() {
        return Err(ChartError::EmptyInput);
    }

    let series = time_series_from_records(records)?;
    let points = accumulate(&series);
    let layout = compute_layout(measured_width_px, ChartKind::Line, layout_config)?;
    let chart = build_line_chart_scene(&points, &layout, style)?;
    debug!(
        points = points.len(),
        width = layout.container_width_px,
        compact = layout.is_compact,
        state = ?LineChartState::Built,
        "line chart built"
    );
    Ok(chart)
}

/// Draws axes, ticks, the value-axis title, the polyline and markers, in
/// that order.
pub fn build_line_chart_scene(
    points: &[CumulativePoint],
    layout: &LayoutGeometry,
    style: &LineChartStyle,
) -> ChartResult<RenderedChart> {
    let domain = SeriesDomain::from_points(points)?;
    let projected = project_points(points, domain, layout)?;
    let plot_w = layout.plot_width_px;
    let plot_h = layout.plot_height_px;

    let axes = make_node(GroupPrimitive::default().with_class("axes"))
        .with_child(make_node(LinePrimitive::new(
            0.0,
            plot_h,
            plot_w,
            plot_h,
            1.0,
            style.axis_color,
        )))
        .with_child(make_node(LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            plot_h,
            1.0,
            style.axis_color,
        )));

    let mut x_ticks = make_node(GroupPrimitive::default().with_class("x-ticks"));
    for tick in axis_ticks((domain.min_time, domain.max_time), layout.label_count) {
        let x = time_scale(tick, domain.min_time, domain.max_time, plot_w)?;
        let Some(time) = DateTime::<Utc>::from_timestamp(tick.round() as i64, 0) else {
            continue;
        };
        x_ticks.append(make_node(LinePrimitive::new(
            x,
            plot_h,
            x,
            plot_h + style.tick_length_px,
            1.0,
            style.axis_color,
        )));
        x_ticks.append(make_node(TextPrimitive::new(
            format_date_label(time, layout.is_compact),
            x,
            plot_h + style.tick_length_px + layout.font_size_px + 4.0,
            layout.font_size_px,
            style.label_color,
            TextAnchor::Middle,
        )));
    }

    let mut y_ticks = make_node(GroupPrimitive::default().with_class("y-ticks"));
    for tick in axis_ticks((0.0, domain.max_value), layout.label_count) {
        let y = value_scale(tick, domain.max_value, plot_h)?;
        y_ticks.append(make_node(LinePrimitive::new(
            -style.tick_length_px,
            y,
            0.0,
            y,
            1.0,
            style.axis_color,
        )));
        y_ticks.append(make_node(TextPrimitive::new(
            format_value_label(tick, layout.is_compact),
            -style.tick_length_px - 4.0,
            y + layout.font_size_px / 3.0,
            layout.font_size_px,
            style.label_color,
            TextAnchor::End,
        )));
    }

    let axis_title = make_node(GroupPrimitive::default().with_class("axis-title")).with_child(
        make_node(
            TextPrimitive::new(
                style.value_axis_title.as_str(),
                -layout.axis_title_offset_px,
                plot_h / 2.0,
                layout.font_size_px,
                style.label_color,
                TextAnchor::Middle,
            )
            .rotated(-90.0),
        ),
    );

    let series = make_node(GroupPrimitive::default().with_class("series")).with_child(make_node(
        PathPrimitive::stroked(polyline_path(&projected), style.line_color, style.line_width_px),
    ));

    let mut markers = make_node(GroupPrimitive::default().with_class("markers"));
    let mut hover_targets = Vec::with_capacity(points.len());
    for (point, &(x, y)) in points.iter().zip(&projected) {
        markers.append(make_node(
            CirclePrimitive::filled(x, y, layout.point_radius_px, style.point_fill)
                .with_stroke(style.point_stroke, 1.5),
        ));
        hover_targets.push(HoverTarget {
            x: layout.margin_left + x,
            y: layout.margin_top + y,
            lines: vec![
                format_tooltip_date(point.timestamp),
                format_xp(point.cumulative_value),
                format_increment(point.increment),
            ],
        });
    }

    let plot: SvgNode = make_node(GroupPrimitive::translated(
        layout.margin_left,
        layout.margin_top,
    ))
    .with_children([axes, x_ticks, y_ticks, axis_title, series, markers]);

    let root = make_node(
        SvgRootPrimitive::new(layout.container_width_px, layout.canvas_height_px)
            .fluid()
            .with_class("xp-line-chart"),
    )
    .with_child(plot);

    Ok(RenderedChart {
        root,
        hover_targets,
    })
}

#[cfg(test)]
mod tests {
    use super::{SeriesDomain, polyline_path};
    use crate::error::ChartError;

    #[test]
    fn polyline_starts_with_move_then_lines() {
        let path = polyline_path(&[(0.0, 40.0), (50.0, 20.0), (100.0, 0.0)]);
        assert_eq!(path.to_svg_data(), "M0,40 L50,20 L100,0");
    }

    #[test]
    fn empty_projection_gives_empty_path() {
        assert!(polyline_path(&[]).is_empty());
    }

    #[test]
    fn domain_of_empty_series_is_empty_input() {
        assert_eq!(SeriesDomain::from_points(&[]), Err(ChartError::EmptyInput));
    }
}
