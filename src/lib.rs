//! progress-charts: headless SVG charting core for a learning-progress
//! dashboard.
//!
//! Two charts are supported: a cumulative XP line chart and a pass/fail
//! donut. Both build typed SVG node trees into an in-memory [`Document`],
//! which a host maps onto a real page.

pub mod api;
pub mod core;
pub mod document;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, RenderOutcome};
pub use document::Document;
pub use error::{ChartError, ChartResult};
