mod markup;
mod node;
mod null_renderer;
mod primitives;

pub use markup::{SvgMarkupRenderer, to_svg_markup};
pub(crate) use markup::escape_text;
pub use node::{NodeDescriptor, NodeKind, SVG_NAMESPACE, SvgNode, make_node};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontWeight, GroupPrimitive, LinePrimitive, PathPrimitive,
    RectPrimitive, RootSizing, SvgRootPrimitive, TextAnchor, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive a fully built node tree so drawing code stays isolated
/// from chart data and layout logic.
pub trait Renderer {
    fn render(&mut self, root: &SvgNode) -> ChartResult<()>;
}
