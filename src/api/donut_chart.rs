use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ArcSweep, GradedOutcome, OutcomeTally, ProjectResult, WedgeGeometry, angle_for_share,
    donut_wedge_path, tally_outcomes,
};
use crate::document::RenderedChart;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, GroupPrimitive, PathPrimitive, RectPrimitive, SvgNode, SvgRootPrimitive,
    TextAnchor, TextPrimitive, make_node,
};

use super::{ChartKind, DonutChartStyle, LayoutConfig, LayoutGeometry, compute_layout};

/// How the ring is drawn for a given tally.
///
/// Unanimous tallies skip arc math and draw one solid ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DonutShape {
    SolidPass,
    SolidFail,
    Split { pass: ArcSweep, fail: ArcSweep },
}

pub fn donut_shape(tally: OutcomeTally) -> ChartResult<DonutShape> {
    if tally.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    if tally.pass_count == tally.total() {
        return Ok(DonutShape::SolidPass);
    }
    if tally.fail_count == tally.total() {
        return Ok(DonutShape::SolidFail);
    }

    let pass_angle = angle_for_share(tally.pass_count, tally.total())?;
    Ok(DonutShape::Split {
        pass: ArcSweep::new(0.0, pass_angle),
        fail: ArcSweep::new(pass_angle, 360.0),
    })
}

/// Classifies, tallies and draws the donut for raw project results.
pub fn build_donut_chart(
    results: &[ProjectResult],
    measured_width_px: f64,
    layout_config: &LayoutConfig,
    style: &DonutChartStyle,
) -> ChartResult<RenderedChart> {
    let outcomes: Vec<GradedOutcome> = results.iter().map(GradedOutcome::from).collect();
    let tally = tally_outcomes(&outcomes);
    let shape = donut_shape(tally)?;
    let layout = compute_layout(measured_width_px, ChartKind::Donut, layout_config)?;
    debug!(
        pass = tally.pass_count,
        fail = tally.fail_count,
        shape = ?shape,
        "donut chart built"
    );
    build_donut_scene(tally, shape, &layout, style)
}

pub fn build_donut_scene(
    tally: OutcomeTally,
    shape: DonutShape,
    layout: &LayoutGeometry,
    style: &DonutChartStyle,
) -> ChartResult<RenderedChart> {
    let canvas = layout.plot_width_px;
    let center_x = canvas / 2.0;
    // Leaves room for the legend under the ring.
    let center_y = style.outer_radius_px + 30.0;
    let ring = WedgeGeometry::ring(
        center_x,
        center_y,
        style.outer_radius_px,
        style.ring_thickness_ratio,
    );

    let mut wedges = make_node(GroupPrimitive::default().with_class("ring"));
    match shape {
        DonutShape::SolidPass => wedges.append(solid_ring(ring, style.pass_color)),
        DonutShape::SolidFail => wedges.append(solid_ring(ring, style.fail_color)),
        DonutShape::Split { pass, fail } => {
            wedges.append(make_node(PathPrimitive::filled(
                donut_wedge_path(ring, pass)?,
                style.pass_color,
            )));
            wedges.append(make_node(PathPrimitive::filled(
                donut_wedge_path(ring, fail)?,
                style.fail_color,
            )));
        }
    }

    let labels = make_node(GroupPrimitive::default().with_class("center-label"))
        .with_child(make_node(
            TextPrimitive::new(
                format!("{}%", tally.pass_percentage()),
                center_x,
                center_y + style.center_font_px / 3.0,
                style.center_font_px,
                style.label_color,
                TextAnchor::Middle,
            )
            .bold(),
        ))
        .with_child(make_node(TextPrimitive::new(
            "Success Rate",
            center_x,
            center_y + style.center_font_px / 3.0 + style.caption_font_px + 6.0,
            style.caption_font_px,
            style.label_color,
            TextAnchor::Middle,
        )));

    let legend_top = center_y + style.outer_radius_px + 20.0;
    let legend_left = center_x - 50.0;
    let row_height = style.swatch_size_px + 8.0;
    let mut legend =
        make_node(GroupPrimitive::translated(legend_left, legend_top).with_class("legend"));
    for (row, (label, count, color)) in [
        ("Pass", tally.pass_count, style.pass_color),
        ("Fail", tally.fail_count, style.fail_color),
    ]
    .into_iter()
    .enumerate()
    {
        let y = row as f64 * row_height;
        legend.append(make_node(
            RectPrimitive::new(0.0, y, style.swatch_size_px, style.swatch_size_px, color)
                .with_corner_radius(2.0),
        ));
        legend.append(make_node(TextPrimitive::new(
            format!("{label} ({count})"),
            style.swatch_size_px + 6.0,
            y + style.swatch_size_px - 2.0,
            style.legend_font_px,
            style.label_color,
            TextAnchor::Start,
        )));
    }

    let root = make_node(
        SvgRootPrimitive::new(canvas, layout.canvas_height_px).with_class("project-donut-chart"),
    )
    .with_children([wedges, labels, legend]);

    Ok(RenderedChart {
        root,
        hover_targets: Vec::new(),
    })
}

fn solid_ring(ring: WedgeGeometry, color: Color) -> SvgNode {
    make_node(CirclePrimitive::ring(
        ring.cx,
        ring.cy,
        ring.mid_radius(),
        color,
        ring.thickness(),
    ))
}
