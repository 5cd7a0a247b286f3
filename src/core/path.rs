use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One SVG path command in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Ordered path geometry, serialized as SVG `d` data.
///
/// Wedges need six commands, so they stay inline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    commands: SmallVec<[PathCommand; 6]>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    #[must_use]
    pub fn arc_to(mut self, radius: f64, large_arc: bool, clockwise: bool, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc,
            clockwise,
            x,
            y,
        });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                x.is_finite() && y.is_finite()
            }
            PathCommand::Arc { radius, x, y, .. } => {
                radius.is_finite() && x.is_finite() && y.is_finite()
            }
            PathCommand::Close => true,
        })
    }

    /// SVG `d` attribute text, e.g. `M0,10 L20,5`.
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo { x, y } => format!("M{},{}", fmt_coord(x), fmt_coord(y)),
                PathCommand::LineTo { x, y } => format!("L{},{}", fmt_coord(x), fmt_coord(y)),
                PathCommand::Arc {
                    radius,
                    large_arc,
                    clockwise,
                    x,
                    y,
                } => format!(
                    "A{r},{r} 0 {} {} {},{}",
                    u8::from(large_arc),
                    u8::from(clockwise),
                    fmt_coord(x),
                    fmt_coord(y),
                    r = fmt_coord(radius),
                ),
                PathCommand::Close => "Z".to_owned(),
            })
            .collect();
        parts.join(" ")
    }
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
#[must_use]
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_owned()
}
