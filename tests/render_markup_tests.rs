use progress_charts::api::{build_donut_chart, build_line_chart};
use progress_charts::core::{ProjectResult, XpRecord};
use progress_charts::render::{NullRenderer, Renderer, SvgMarkupRenderer};

#[test]
fn line_chart_markup_contains_polyline_and_markers() {
    let chart = build_line_chart(
        &[
            XpRecord::new(10.0, "2024-01-01"),
            XpRecord::new(5.0, "2024-01-02"),
        ],
        800.0,
        &Default::default(),
        &Default::default(),
    )
    .expect("chart");

    let mut renderer = SvgMarkupRenderer::default();
    renderer.render(&chart.root).expect("render");
    let markup = renderer.into_output();

    assert!(markup.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 800 300" preserveAspectRatio="xMidYMid meet" class="xp-line-chart">"#
    ));
    assert!(markup.contains(r#"<g transform="translate(60,20)">"#));
    assert!(markup.contains(r##"d="M0,76.67 L710,0" fill="none" stroke="#2196f3" stroke-width="2""##));
    assert_eq!(markup.matches("<circle").count(), 2);
    assert!(markup.contains(r#"transform="rotate(-90,-50,115)">Total XP</text>"#));
    assert!(markup.ends_with("</svg>"));
}

#[test]
fn donut_wedges_render_as_closed_arc_paths() {
    let chart = build_donut_chart(
        &[
            ProjectResult::graded(1.0),
            ProjectResult::graded(1.0),
            ProjectResult::graded(0.0),
        ],
        800.0,
        &Default::default(),
        &Default::default(),
    )
    .expect("donut");

    let mut markup = SvgMarkupRenderer::default();
    markup.render(&chart.root).expect("render");
    let output = markup.output();

    assert_eq!(output.matches("<path").count(), 2);
    assert_eq!(output.matches(" A").count(), 4);
    assert!(output.contains(r##"fill="#4caf50""##));
    assert!(output.contains(r##"fill="#f44336""##));
    assert!(output.contains(r#"font-weight="bold">67%</text>"#));
    assert!(output.contains(r#"width="300" height="300" viewBox="0 0 300 300""#));
    assert!(output.contains(">Pass (2)</text>"));

    let mut null = NullRenderer::default();
    null.render(&chart.root).expect("valid");
    assert_eq!(null.last_path_count, 2);
    assert_eq!(null.last_text_count, 4);
}
