use crate::error::ChartResult;
use crate::render::{NodeKind, Renderer, SvgNode};

/// Headless renderer used by tests.
///
/// It still validates the tree so tests catch invalid geometry before it
/// reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_node_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, root: &SvgNode) -> ChartResult<()> {
        root.validate()?;
        self.last_node_count = root.walk().count();
        self.last_path_count = root.count_kind(NodeKind::Path);
        self.last_text_count = root.count_kind(NodeKind::Text);
        Ok(())
    }
}
