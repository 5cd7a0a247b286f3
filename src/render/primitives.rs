use serde::{Deserialize, Serialize};

use crate::core::PathData;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rrggbb`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be #rrggbb"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ChartError::InvalidData(format!("color `{hex}` must be #rrggbb")))
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// SVG paint text: `#rrggbb` when opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_svg(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (to_byte(self.red), to_byte(self.green), to_byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r},{g},{b},{:.2})", self.alpha.clamp(0.0, 1.0))
        }
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn ensure_positive(what: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )))
    }
}

/// How the outermost `<svg>` is sized on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RootSizing {
    /// Pixel `width`/`height` equal to the viewBox.
    #[default]
    Fixed,
    /// `100%` of the container, scaled with `xMidYMid meet`.
    Fluid,
}

/// Outermost `<svg>` element. `width`/`height` always define the viewBox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgRootPrimitive {
    pub width: f64,
    pub height: f64,
    pub class: Option<String>,
    #[serde(default)]
    pub sizing: RootSizing,
}

impl SvgRootPrimitive {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            class: None,
            sizing: RootSizing::Fixed,
        }
    }

    #[must_use]
    pub fn fluid(mut self) -> Self {
        self.sizing = RootSizing::Fluid;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_positive("svg width", self.width)?;
        ensure_positive("svg height", self.height)
    }
}

/// `<g>` with an optional translation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupPrimitive {
    pub translate: Option<(f64, f64)>,
    pub class: Option<String>,
}

impl GroupPrimitive {
    #[must_use]
    pub fn translated(x: f64, y: f64) -> Self {
        Self {
            translate: Some((x, y)),
            class: None,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.translate {
            Some((x, y)) => ensure_finite("group translate", &[x, y]),
            None => Ok(()),
        }
    }
}

/// One straight segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("line", &[self.x1, self.y1, self.x2, self.y2])?;
        ensure_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub data: PathData,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(data: PathData, stroke: Color, stroke_width: f64) -> Self {
        Self {
            data,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    #[must_use]
    pub fn filled(data: PathData, fill: Color) -> Self {
        Self {
            data,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data.is_empty() || !self.data.is_finite() {
            return Err(ChartError::InvalidData(
                "path data must be non-empty and finite".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            ensure_positive("path stroke width", self.stroke_width)?;
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub fn filled(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Unfilled circle; a thick stroke draws a solid ring.
    #[must_use]
    pub fn ring(cx: f64, cy: f64, radius: f64, stroke: Color, stroke_width: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("circle", &[self.cx, self.cy])?;
        ensure_positive("circle radius", self.radius)?;
        if let Some(stroke) = self.stroke {
            ensure_positive("circle stroke width", self.stroke_width)?;
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal anchor relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub weight: FontWeight,
    /// Rotation around `(x, y)`, clockwise degrees.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            anchor,
            weight: FontWeight::Normal,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text", &[self.x, self.y, self.rotation_deg])?;
        ensure_positive("font size", self.font_size_px)?;
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("rect", &[self.x, self.y, self.corner_radius])?;
        ensure_positive("rect width", self.width)?;
        ensure_positive("rect height", self.height)?;
        self.fill.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{CirclePrimitive, Color, TextAnchor, TextPrimitive};

    #[test]
    fn opaque_colors_serialize_as_hex() {
        assert_eq!(Color::from_rgb8(0x4c, 0xaf, 0x50).to_svg(), "#4caf50");
        assert_eq!(Color::rgba(0.0, 0.0, 0.0, 0.5).to_svg(), "rgba(0,0,0,0.50)");
    }

    #[test]
    fn hex_parsing_round_trips_through_svg_paint() {
        let color = Color::from_hex("#f44336").expect("hex");
        assert_eq!(color.to_svg(), "#f44336");
        assert!(Color::from_hex("f443").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn empty_text_is_invalid() {
        let text = TextPrimitive::new("", 0.0, 0.0, 12.0, Color::rgb(0.0, 0.0, 0.0), TextAnchor::Start);
        assert!(text.validate().is_err());
    }

    #[test]
    fn zero_radius_circle_is_invalid() {
        let circle = CirclePrimitive::filled(1.0, 1.0, 0.0, Color::rgb(1.0, 0.0, 0.0));
        assert!(circle.validate().is_err());
    }
}
