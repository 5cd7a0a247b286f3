use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{
    CirclePrimitive, GroupPrimitive, LinePrimitive, PathPrimitive, RectPrimitive,
    SvgRootPrimitive, TextPrimitive,
};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    SvgRoot,
    Group,
    Line,
    Path,
    Circle,
    Text,
    Rect,
}

impl NodeKind {
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::SvgRoot => "svg",
            Self::Group => "g",
            Self::Line => "line",
            Self::Path => "path",
            Self::Circle => "circle",
            Self::Text => "text",
            Self::Rect => "rect",
        }
    }
}

/// Typed attribute set for one node, one variant per primitive kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeDescriptor {
    SvgRoot(SvgRootPrimitive),
    Group(GroupPrimitive),
    Line(LinePrimitive),
    Path(PathPrimitive),
    Circle(CirclePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
}

impl NodeDescriptor {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::SvgRoot(_) => NodeKind::SvgRoot,
            Self::Group(_) => NodeKind::Group,
            Self::Line(_) => NodeKind::Line,
            Self::Path(_) => NodeKind::Path,
            Self::Circle(_) => NodeKind::Circle,
            Self::Text(_) => NodeKind::Text,
            Self::Rect(_) => NodeKind::Rect,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::SvgRoot(root) => root.validate(),
            Self::Group(group) => group.validate(),
            Self::Line(line) => line.validate(),
            Self::Path(path) => path.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Text(text) => text.validate(),
            Self::Rect(rect) => rect.validate(),
        }
    }
}

macro_rules! descriptor_from {
    ($($primitive:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$primitive> for NodeDescriptor {
                fn from(value: $primitive) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

descriptor_from! {
    SvgRootPrimitive => SvgRoot,
    GroupPrimitive => Group,
    LinePrimitive => Line,
    PathPrimitive => Path,
    CirclePrimitive => Circle,
    TextPrimitive => Text,
    RectPrimitive => Rect,
}

/// Detached graphics node. Children are appended by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgNode {
    pub descriptor: NodeDescriptor,
    pub children: Vec<SvgNode>,
}

/// Structural constructor: wraps a descriptor in a detached node without
/// checking attribute semantics.
#[must_use]
pub fn make_node(descriptor: impl Into<NodeDescriptor>) -> SvgNode {
    SvgNode {
        descriptor: descriptor.into(),
        children: Vec::new(),
    }
}

impl SvgNode {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.descriptor.kind()
    }

    /// Every node this crate builds lives in the SVG namespace.
    #[must_use]
    pub fn namespace(&self) -> &'static str {
        SVG_NAMESPACE
    }

    pub fn append(&mut self, child: SvgNode) {
        self.children.push(child);
    }

    #[must_use]
    pub fn with_child(mut self, child: SvgNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SvgNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Pre-order traversal including `self`.
    pub fn walk(&self) -> impl Iterator<Item = &SvgNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    #[must_use]
    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.walk().filter(|node| node.kind() == kind).count()
    }

    /// First `<g>` carrying `class`, searched pre-order.
    #[must_use]
    pub fn find_group(&self, class: &str) -> Option<&SvgNode> {
        self.walk().find(|node| {
            matches!(
                &node.descriptor,
                NodeDescriptor::Group(group) if group.class.as_deref() == Some(class)
            )
        })
    }

    /// Text content of every `<text>` descendant, pre-order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|node| match &node.descriptor {
                NodeDescriptor::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Validates this node and all descendants.
    pub fn validate(&self) -> ChartResult<()> {
        for node in self.walk() {
            node.descriptor.validate()?;
        }
        Ok(())
    }
}
