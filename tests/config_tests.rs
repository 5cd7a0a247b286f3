use progress_charts::api::{LayoutConfig, Margins};
use progress_charts::{ChartError, Dashboard, DashboardConfig};

#[test]
fn partial_json_fills_defaults() {
    let config = DashboardConfig::from_json_str(
        r#"{"resize_debounce_ms": 100, "layout": {"compact_threshold_px": 640}}"#,
    )
    .expect("config");

    assert_eq!(config.resize_debounce_ms, 100);
    assert_eq!(config.layout.compact_threshold_px, 640.0);
    assert_eq!(config.layout.fallback_width_px, 320.0);
    assert_eq!(config.line.empty_message, "No XP data available");
    assert_eq!(config.error_message, "Unable to render chart");
}

#[test]
fn pretty_json_reads_back() {
    let config = DashboardConfig::default().with_resize_debounce_ms(400);
    let json = config.to_json_pretty().expect("json");
    let parsed = DashboardConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.resize_debounce_ms, 400);
    assert_eq!(parsed.layout, config.layout);
    assert_eq!(parsed.donut.empty_message, config.donut.empty_message);
}

#[test]
fn malformed_json_is_invalid_config() {
    let err = DashboardConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn negative_margins_are_rejected() {
    let layout = LayoutConfig {
        regular_margins: Margins::new(20.0, -1.0, 50.0, 60.0),
        ..LayoutConfig::default()
    };
    let config = DashboardConfig::default().with_layout(layout);
    assert!(matches!(
        Dashboard::new(config),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn zero_tick_count_is_rejected() {
    let layout = LayoutConfig {
        compact_tick_count: 0,
        ..LayoutConfig::default()
    };
    assert!(matches!(
        layout.validate(),
        Err(ChartError::InvalidConfig(_))
    ));
}
