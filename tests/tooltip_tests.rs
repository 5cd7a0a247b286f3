use progress_charts::core::XpRecord;
use progress_charts::{Dashboard, DashboardConfig, Document};

fn rendered_dashboard() -> Dashboard {
    let mut document = Document::new();
    document.add_container("xp", 800.0);
    let mut dashboard =
        Dashboard::with_document(document, DashboardConfig::default()).expect("dashboard");
    dashboard.render_line_chart(
        &[
            XpRecord::new(10.0, "2024-01-01"),
            XpRecord::new(5.0, "2024-01-02"),
        ],
        "xp",
    );
    dashboard
}

#[test]
fn hovering_a_marker_shows_date_total_and_increment() {
    let mut dashboard = rendered_dashboard();
    let tooltip = dashboard.pointer_enter("xp", 1).expect("tooltip").clone();

    assert_eq!(tooltip.lines, ["Jan 2, 2024", "15 XP", "+5 XP"]);
    // Marker at (60 + 710, 20 + 0) shifted by (10, -28).
    assert_eq!(tooltip.left_px, 780.0);
    assert_eq!(tooltip.top_px, -8.0);
}

#[test]
fn at_most_one_tooltip_is_alive() {
    let mut dashboard = rendered_dashboard();
    dashboard.pointer_enter("xp", 0);
    dashboard.pointer_enter("xp", 1);

    let live = dashboard.document().floating_tooltips();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].0, "xp");
    assert_eq!(live[0].1.marker_index, 1);
}

#[test]
fn leaving_removes_tooltip() {
    let mut dashboard = rendered_dashboard();
    dashboard.pointer_enter("xp", 0);
    assert!(dashboard.pointer_leave("xp"));
    assert!(!dashboard.pointer_leave("xp"));
    assert!(dashboard.document().floating_tooltips().is_empty());
}

#[test]
fn rerender_releases_live_tooltip() {
    let mut dashboard = rendered_dashboard();
    dashboard.pointer_enter("xp", 0);
    dashboard.render_line_chart(&[XpRecord::new(1.0, "2024-01-01")], "xp");
    assert!(dashboard.document().floating_tooltips().is_empty());
}

#[test]
fn unknown_marker_or_container_shows_nothing() {
    let mut dashboard = rendered_dashboard();
    assert!(dashboard.pointer_enter("xp", 7).is_none());
    assert!(dashboard.pointer_enter("missing", 0).is_none());
}
