mod resize;
mod tooltip;

pub use resize::{DebounceTimer, RedrawFn, ResizeCoordinator};
pub use tooltip::{FloatingTooltip, TooltipController};
