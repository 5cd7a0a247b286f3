use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Pixel margins around a plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    fn validate(self, name: &str) -> ChartResult<()> {
        for value in [self.top, self.right, self.bottom, self.left] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} margins must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Responsive layout constants shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width used when the container measures zero (detached or hidden).
    pub fallback_width_px: f64,
    /// Containers narrower than this switch to compact mode.
    pub compact_threshold_px: f64,
    pub aspect_ratio: f64,
    pub max_height_px: f64,
    pub regular_margins: Margins,
    pub compact_margins: Margins,
    pub regular_font_px: f64,
    pub compact_font_px: f64,
    pub regular_point_radius_px: f64,
    pub compact_point_radius_px: f64,
    /// Axis label intervals; each axis draws one more tick than this.
    pub regular_tick_count: usize,
    pub compact_tick_count: usize,
    pub regular_axis_title_offset_px: f64,
    pub compact_axis_title_offset_px: f64,
    /// Square canvas side of the donut chart.
    pub donut_canvas_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fallback_width_px: 320.0,
            compact_threshold_px: 500.0,
            aspect_ratio: 0.6,
            max_height_px: 300.0,
            regular_margins: Margins::new(20.0, 30.0, 50.0, 60.0),
            compact_margins: Margins::new(20.0, 15.0, 40.0, 45.0),
            regular_font_px: 12.0,
            compact_font_px: 10.0,
            regular_point_radius_px: 4.0,
            compact_point_radius_px: 3.0,
            regular_tick_count: 5,
            compact_tick_count: 3,
            regular_axis_title_offset_px: 50.0,
            compact_axis_title_offset_px: 30.0,
            donut_canvas_px: 300.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("fallback_width_px", self.fallback_width_px),
            ("aspect_ratio", self.aspect_ratio),
            ("max_height_px", self.max_height_px),
            ("regular_font_px", self.regular_font_px),
            ("compact_font_px", self.compact_font_px),
            ("regular_point_radius_px", self.regular_point_radius_px),
            ("compact_point_radius_px", self.compact_point_radius_px),
            ("regular_axis_title_offset_px", self.regular_axis_title_offset_px),
            ("compact_axis_title_offset_px", self.compact_axis_title_offset_px),
            ("donut_canvas_px", self.donut_canvas_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.compact_threshold_px.is_finite() || self.compact_threshold_px < 0.0 {
            return Err(ChartError::InvalidConfig(
                "compact_threshold_px must be finite and >= 0".to_owned(),
            ));
        }
        if self.regular_tick_count == 0 || self.compact_tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick counts must be >= 1".to_owned(),
            ));
        }
        self.regular_margins.validate("regular")?;
        self.compact_margins.validate("compact")
    }
}

/// Colors and strokes of the cumulative XP line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartStyle {
    pub line_color: Color,
    pub line_width_px: f64,
    pub point_fill: Color,
    pub point_stroke: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub tick_length_px: f64,
    /// Rotated title of the value axis.
    pub value_axis_title: String,
    /// Tooltip placement relative to the hovered marker.
    pub tooltip_offset_px: (f64, f64),
    pub empty_message: String,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgb8(0x21, 0x96, 0xf3),
            line_width_px: 2.0,
            point_fill: Color::from_rgb8(0x21, 0x96, 0xf3),
            point_stroke: Color::rgb(1.0, 1.0, 1.0),
            axis_color: Color::from_rgb8(0x99, 0x99, 0x99),
            label_color: Color::from_rgb8(0x66, 0x66, 0x66),
            tick_length_px: 6.0,
            value_axis_title: "Total XP".to_owned(),
            tooltip_offset_px: (10.0, -28.0),
            empty_message: "No XP data available".to_owned(),
        }
    }
}

/// Colors and ring proportions of the pass/fail donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutChartStyle {
    pub outer_radius_px: f64,
    /// Ring thickness as a share of the outer radius.
    pub ring_thickness_ratio: f64,
    pub pass_color: Color,
    pub fail_color: Color,
    pub label_color: Color,
    pub center_font_px: f64,
    pub caption_font_px: f64,
    pub legend_font_px: f64,
    pub swatch_size_px: f64,
    pub empty_message: String,
}

impl Default for DonutChartStyle {
    fn default() -> Self {
        Self {
            outer_radius_px: 100.0,
            ring_thickness_ratio: 0.4,
            pass_color: Color::from_rgb8(0x4c, 0xaf, 0x50),
            fail_color: Color::from_rgb8(0xf4, 0x43, 0x36),
            label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            center_font_px: 28.0,
            caption_font_px: 12.0,
            legend_font_px: 12.0,
            swatch_size_px: 12.0,
            empty_message: "No project data available".to_owned(),
        }
    }
}

impl DonutChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.outer_radius_px.is_finite() || self.outer_radius_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "outer_radius_px must be finite and > 0".to_owned(),
            ));
        }
        if !self.ring_thickness_ratio.is_finite()
            || self.ring_thickness_ratio <= 0.0
            || self.ring_thickness_ratio > 1.0
        {
            return Err(ChartError::InvalidConfig(
                "ring_thickness_ratio must be in (0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_resize_debounce_ms() -> u64 {
    250
}

fn default_error_message() -> String {
    "Unable to render chart".to_owned()
}

/// Complete dashboard configuration.
///
/// Serializable so hosts can ship chart settings as JSON next to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub line: LineChartStyle,
    #[serde(default)]
    pub donut: DonutChartStyle,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Placeholder shown for failures other than empty input.
    #[serde(default = "default_error_message")]
    pub error_message: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            line: LineChartStyle::default(),
            donut: DonutChartStyle::default(),
            resize_debounce_ms: default_resize_debounce_ms(),
            error_message: default_error_message(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;
        self.donut.validate()?;
        if !self.line.line_width_px.is_finite() || self.line.line_width_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line_width_px must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: LineChartStyle) -> Self {
        self.line = style;
        self
    }

    #[must_use]
    pub fn with_donut_style(mut self, style: DonutChartStyle) -> Self {
        self.donut = style;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }
}
