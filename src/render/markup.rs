use std::fmt::Write as _;

use crate::core::fmt_coord;
use crate::error::{ChartError, ChartResult};

use super::{FontWeight, NodeDescriptor, Renderer, RootSizing, SVG_NAMESPACE, SvgNode};

/// Serializes node trees into SVG text.
#[derive(Debug, Default)]
pub struct SvgMarkupRenderer {
    output: String,
}

impl SvgMarkupRenderer {
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for SvgMarkupRenderer {
    fn render(&mut self, root: &SvgNode) -> ChartResult<()> {
        root.validate()?;
        self.output.clear();
        write_node(&mut self.output, root, true)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))
    }
}

/// Markup for `root`, skipping validation.
#[must_use]
pub fn to_svg_markup(root: &SvgNode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, root, true);
    out
}

pub(crate) fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn paint(color: Option<super::Color>) -> String {
    color.map_or_else(|| "none".to_owned(), super::Color::to_svg)
}

fn write_node(out: &mut String, node: &SvgNode, is_root: bool) -> std::fmt::Result {
    let tag = node.kind().tag_name();
    write!(out, "<{tag}")?;
    if is_root {
        write!(out, r#" xmlns="{SVG_NAMESPACE}""#)?;
    }

    match &node.descriptor {
        NodeDescriptor::SvgRoot(root) => {
            let (w, h) = (fmt_coord(root.width), fmt_coord(root.height));
            match root.sizing {
                RootSizing::Fixed => {
                    write!(out, r#" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#)?;
                }
                RootSizing::Fluid => {
                    write!(
                        out,
                        r#" width="100%" height="100%" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet""#
                    )?;
                }
            }
            if let Some(class) = &root.class {
                write!(out, r#" class="{}""#, escape_text(class))?;
            }
        }
        NodeDescriptor::Group(group) => {
            if let Some(class) = &group.class {
                write!(out, r#" class="{}""#, escape_text(class))?;
            }
            if let Some((x, y)) = group.translate {
                write!(
                    out,
                    r#" transform="translate({},{})""#,
                    fmt_coord(x),
                    fmt_coord(y)
                )?;
            }
        }
        NodeDescriptor::Line(line) => {
            write!(
                out,
                r#" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                fmt_coord(line.x1),
                fmt_coord(line.y1),
                fmt_coord(line.x2),
                fmt_coord(line.y2),
                line.color.to_svg(),
                fmt_coord(line.stroke_width)
            )?;
        }
        NodeDescriptor::Path(path) => {
            write!(
                out,
                r#" d="{}" fill="{}" stroke="{}""#,
                path.data.to_svg_data(),
                paint(path.fill),
                paint(path.stroke)
            )?;
            if path.stroke.is_some() {
                write!(out, r#" stroke-width="{}""#, fmt_coord(path.stroke_width))?;
            }
        }
        NodeDescriptor::Circle(circle) => {
            write!(
                out,
                r#" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}""#,
                fmt_coord(circle.cx),
                fmt_coord(circle.cy),
                fmt_coord(circle.radius),
                paint(circle.fill),
                paint(circle.stroke)
            )?;
            if circle.stroke.is_some() {
                write!(out, r#" stroke-width="{}""#, fmt_coord(circle.stroke_width))?;
            }
        }
        NodeDescriptor::Text(text) => {
            write!(
                out,
                r#" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
                fmt_coord(text.x),
                fmt_coord(text.y),
                fmt_coord(text.font_size_px),
                text.color.to_svg(),
                text.anchor.as_svg()
            )?;
            if text.weight == FontWeight::Bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if text.rotation_deg != 0.0 {
                write!(
                    out,
                    r#" transform="rotate({},{},{})""#,
                    fmt_coord(text.rotation_deg),
                    fmt_coord(text.x),
                    fmt_coord(text.y)
                )?;
            }
        }
        NodeDescriptor::Rect(rect) => {
            write!(
                out,
                r#" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                fmt_coord(rect.x),
                fmt_coord(rect.y),
                fmt_coord(rect.width),
                fmt_coord(rect.height),
                rect.fill.to_svg()
            )?;
            if rect.corner_radius > 0.0 {
                write!(out, r#" rx="{}""#, fmt_coord(rect.corner_radius))?;
            }
        }
    }

    let text_content = match &node.descriptor {
        NodeDescriptor::Text(text) => Some(escape_text(&text.text)),
        _ => None,
    };
    if node.children.is_empty() && text_content.is_none() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    if let Some(content) = text_content {
        out.push_str(&content);
    }
    for child in &node.children {
        write_node(out, child, false)?;
    }
    write!(out, "</{tag}>")
}

#[cfg(test)]
mod tests {
    use super::{escape_text, to_svg_markup};
    use crate::render::{
        CirclePrimitive, Color, GroupPrimitive, SvgRootPrimitive, TextAnchor, TextPrimitive,
        make_node,
    };

    #[test]
    fn root_carries_namespace_and_children_nest() {
        let tree = make_node(SvgRootPrimitive::new(300.0, 200.0)).with_child(
            make_node(GroupPrimitive::translated(60.0, 20.0)).with_child(make_node(
                CirclePrimitive::filled(5.0, 5.0, 4.0, Color::from_rgb8(0x21, 0x96, 0xf3)),
            )),
        );

        let markup = to_svg_markup(&tree);
        assert!(markup.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="200" viewBox="0 0 300 200">"#
        ));
        assert!(markup.contains(
            r##"<g transform="translate(60,20)"><circle cx="5" cy="5" r="4" fill="#2196f3" stroke="none"/></g>"##
        ));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        let node = make_node(TextPrimitive::new(
            "<3",
            0.0,
            0.0,
            10.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextAnchor::Middle,
        ));
        assert!(to_svg_markup(&node).contains(">&lt;3</text>"));
    }

    #[test]
    fn fluid_root_fills_container_and_keeps_view_box() {
        let node = make_node(SvgRootPrimitive::new(800.0, 300.0).fluid());
        assert_eq!(
            to_svg_markup(&node),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 800 300" preserveAspectRatio="xMidYMid meet"/>"#
        );
    }

    #[test]
    fn rotated_text_turns_around_its_anchor() {
        let node = make_node(
            TextPrimitive::new(
                "Total XP",
                -50.0,
                115.0,
                12.0,
                Color::rgb(0.0, 0.0, 0.0),
                TextAnchor::Middle,
            )
            .rotated(-90.0),
        );
        assert!(to_svg_markup(&node).contains(r#" transform="rotate(-90,-50,115)">Total XP</text>"#));
    }
}
