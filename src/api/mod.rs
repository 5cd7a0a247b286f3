mod axis_ticks;
mod config;
mod dashboard;
mod donut_chart;
mod label_format;
mod layout;
mod line_chart;

pub use config::{DashboardConfig, DonutChartStyle, LayoutConfig, LineChartStyle, Margins};
pub use dashboard::{Dashboard, RenderOutcome};
pub use donut_chart::{DonutShape, build_donut_chart, build_donut_scene, donut_shape};
pub use layout::{ChartKind, LayoutGeometry, compute_layout, effective_width};
pub use line_chart::{
    LineChartState, SeriesDomain, build_line_chart, build_line_chart_scene, polyline_path,
    project_points,
};
