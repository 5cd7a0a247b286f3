use progress_charts::api::RenderOutcome;
use progress_charts::{ChartError, Dashboard, DashboardConfig, Document};

fn dashboard(width: f64) -> Dashboard {
    let mut document = Document::new();
    document.add_container("xp", width);
    document.add_container("projects", width);
    Dashboard::with_document(document, DashboardConfig::default()).expect("dashboard")
}

#[test]
fn empty_inputs_show_placeholders_and_register_nothing() {
    let mut dashboard = dashboard(800.0);

    assert_eq!(
        dashboard.render_line_chart(&[], "xp"),
        RenderOutcome::Placeholder(ChartError::EmptyInput)
    );
    assert_eq!(
        dashboard.render_donut_chart(&[], "projects"),
        RenderOutcome::Placeholder(ChartError::EmptyInput)
    );

    let document = dashboard.document();
    assert_eq!(
        document.container("xp").and_then(|c| c.placeholder()),
        Some("No XP data available")
    );
    assert_eq!(
        document.container("projects").and_then(|c| c.placeholder()),
        Some("No project data available")
    );
    assert_eq!(dashboard.resize_handler_count(), 0);
}

#[test]
fn missing_container_is_a_silent_no_op() {
    let mut dashboard = dashboard(800.0);
    let records = [progress_charts::core::XpRecord::new(3.0, "2024-02-02")];

    assert_eq!(
        dashboard.render_line_chart(&records, "nowhere"),
        RenderOutcome::ContainerMissing
    );
    assert_eq!(
        dashboard.render_donut_chart(&[], "nowhere"),
        RenderOutcome::ContainerMissing
    );
    assert_eq!(dashboard.resize_handler_count(), 0);
    assert!(dashboard.document().container("nowhere").is_none());
}

#[test]
fn unusably_narrow_container_aborts_with_error_placeholder() {
    let mut dashboard = dashboard(50.0);
    let records = [progress_charts::core::XpRecord::new(3.0, "2024-02-02")];

    let outcome = dashboard.render_line_chart(&records, "xp");
    assert!(matches!(
        outcome,
        RenderOutcome::Placeholder(ChartError::InvalidDomain(_))
    ));
    assert_eq!(
        dashboard.document().container("xp").and_then(|c| c.placeholder()),
        Some("Unable to render chart")
    );
    assert!(!dashboard.has_resize_handler("xp"));
}

#[test]
fn zero_width_container_falls_back_to_default_width() {
    let mut dashboard = dashboard(0.0);
    let records = [progress_charts::core::XpRecord::new(3.0, "2024-02-02")];

    assert!(dashboard.render_line_chart(&records, "xp").is_rendered());
    let markup = dashboard
        .document()
        .container("xp")
        .map(|c| c.to_markup())
        .expect("container");
    assert!(markup.contains(r#"viewBox="0 0 320 192""#));
}
