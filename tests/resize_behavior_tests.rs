use std::time::{Duration, Instant};

use progress_charts::api::LineChartState;
use progress_charts::core::XpRecord;
use progress_charts::render::NodeDescriptor;
use progress_charts::{Dashboard, DashboardConfig, Document};

fn records() -> Vec<XpRecord> {
    vec![
        XpRecord::new(10.0, "2024-01-01"),
        XpRecord::new(5.0, "2024-01-02"),
    ]
}

fn dashboard() -> Dashboard {
    let mut document = Document::new();
    document.add_container("xp", 800.0);
    document.add_container("other", 640.0);
    Dashboard::with_document(document, DashboardConfig::default()).expect("dashboard")
}

fn series_path(dashboard: &Dashboard, id: &str) -> String {
    let chart = dashboard
        .document()
        .container(id)
        .and_then(|container| container.chart())
        .expect("chart");
    chart
        .root
        .find_group("series")
        .and_then(|series| {
            series.walk().find_map(|node| match &node.descriptor {
                NodeDescriptor::Path(path) => Some(path.data.to_svg_data()),
                _ => None,
            })
        })
        .expect("series path")
}

#[test]
fn rendering_twice_keeps_one_handler_per_container() {
    let mut dashboard = dashboard();
    dashboard.render_line_chart(&records(), "xp");
    dashboard.render_line_chart(&records(), "xp");
    assert_eq!(dashboard.resize_handler_count(), 1);

    dashboard.render_line_chart(&records(), "other");
    assert_eq!(dashboard.resize_handler_count(), 2);
    assert!(dashboard.has_resize_handler("xp"));
    assert!(dashboard.has_resize_handler("other"));
}

#[test]
fn rebuild_waits_for_quiet_window_then_redraws_once() {
    let mut dashboard = dashboard();
    dashboard.render_line_chart(&records(), "xp");

    let start = Instant::now();
    dashboard.document_mut().set_container_width("xp", 600.0);
    dashboard.viewport_resized(start);
    assert_eq!(
        dashboard.line_chart_state("xp"),
        Some(LineChartState::Stale)
    );

    assert_eq!(dashboard.advance(start + Duration::from_millis(100)), 0);
    // A second signal inside the window pushes the deadline back.
    dashboard.viewport_resized(start + Duration::from_millis(200));
    assert_eq!(dashboard.advance(start + Duration::from_millis(300)), 0);
    assert_eq!(dashboard.advance(start + Duration::from_millis(450)), 1);
    assert_eq!(dashboard.advance(start + Duration::from_millis(900)), 0);

    assert_eq!(
        dashboard.line_chart_state("xp"),
        Some(LineChartState::Attached)
    );
    // 600px wide: plot width 510.
    assert!(series_path(&dashboard, "xp").ends_with("L510,0"));
}

#[test]
fn height_only_resize_does_not_redraw() {
    let mut dashboard = dashboard();
    dashboard.render_line_chart(&records(), "xp");
    let before = series_path(&dashboard, "xp");

    let start = Instant::now();
    dashboard.viewport_resized(start);
    assert_eq!(dashboard.advance(start + Duration::from_millis(250)), 0);
    assert_eq!(series_path(&dashboard, "xp"), before);
}

#[test]
fn removed_container_drops_its_handler() {
    let mut dashboard = dashboard();
    dashboard.render_line_chart(&records(), "xp");
    dashboard.document_mut().remove_container("xp");

    let start = Instant::now();
    dashboard.viewport_resized(start);
    assert_eq!(dashboard.advance(start + Duration::from_millis(250)), 0);
    assert!(!dashboard.has_resize_handler("xp"));
}

#[test]
fn rendering_empty_data_removes_existing_handler() {
    let mut dashboard = dashboard();
    dashboard.render_line_chart(&records(), "xp");
    assert!(dashboard.has_resize_handler("xp"));

    dashboard.render_line_chart(&[], "xp");
    assert!(!dashboard.has_resize_handler("xp"));
    assert_eq!(
        dashboard.line_chart_state("xp"),
        Some(LineChartState::Empty)
    );
}

#[test]
fn custom_debounce_window_is_honoured() {
    let mut document = Document::new();
    document.add_container("xp", 800.0);
    let config = DashboardConfig::default().with_resize_debounce_ms(50);
    let mut dashboard = Dashboard::with_document(document, config).expect("dashboard");
    dashboard.render_line_chart(&records(), "xp");

    let start = Instant::now();
    dashboard.document_mut().set_container_width("xp", 700.0);
    dashboard.viewport_resized(start);
    assert_eq!(dashboard.advance(start + Duration::from_millis(50)), 1);
}
