//! In-memory stand-in for the page a chart is attached to.
//!
//! Containers are looked up by identifier, report a measured width and hold
//! either nothing, a placeholder message or one rendered chart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{FloatingTooltip, TooltipController};
use crate::render::{SvgNode, escape_text, to_svg_markup};

/// Hover area of one data-point marker, in container coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// A finished chart attached to a container.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub root: SvgNode,
    pub hover_targets: Vec<HoverTarget>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContainerContent {
    #[default]
    Empty,
    Placeholder(String),
    Chart(RenderedChart),
}

#[derive(Debug)]
pub struct Container {
    id: String,
    measured_width_px: f64,
    content: ContainerContent,
    tooltip: TooltipController,
}

impl Container {
    fn new(id: String, measured_width_px: f64) -> Self {
        Self {
            id,
            measured_width_px,
            content: ContainerContent::Empty,
            tooltip: TooltipController::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn measured_width_px(&self) -> f64 {
        self.measured_width_px
    }

    #[must_use]
    pub fn content(&self) -> &ContainerContent {
        &self.content
    }

    #[must_use]
    pub fn chart(&self) -> Option<&RenderedChart> {
        match &self.content {
            ContainerContent::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match &self.content {
            ContainerContent::Placeholder(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub fn tooltip_mut(&mut self) -> &mut TooltipController {
        &mut self.tooltip
    }

    /// Drops current content and any live tooltip.
    pub fn clear(&mut self) {
        self.tooltip.release();
        self.content = ContainerContent::Empty;
        trace!(container = %self.id, "container cleared");
    }

    pub fn set_placeholder(&mut self, message: impl Into<String>) {
        self.clear();
        self.content = ContainerContent::Placeholder(message.into());
    }

    pub fn attach_chart(&mut self, chart: RenderedChart) {
        self.clear();
        self.content = ContainerContent::Chart(chart);
    }

    /// HTML fragment for the container's content.
    #[must_use]
    pub fn to_markup(&self) -> String {
        match &self.content {
            ContainerContent::Empty => String::new(),
            ContainerContent::Placeholder(text) => {
                format!(r#"<p class="chart-placeholder">{}</p>"#, escape_text(text))
            }
            ContainerContent::Chart(chart) => to_svg_markup(&chart.root),
        }
    }
}

#[derive(Debug, Default)]
pub struct Document {
    containers: IndexMap<String, Container>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a container, replacing any container with the same id.
    pub fn add_container(&mut self, id: impl Into<String>, measured_width_px: f64) {
        let id = id.into();
        self.containers
            .insert(id.clone(), Container::new(id, measured_width_px));
    }

    /// Removes a container, as page navigation would.
    pub fn remove_container(&mut self, id: &str) -> bool {
        self.containers.shift_remove(id).is_some()
    }

    /// Updates the width a container measures at. Returns `false` for an
    /// unknown id.
    pub fn set_container_width(&mut self, id: &str, measured_width_px: f64) -> bool {
        match self.containers.get_mut(id) {
            Some(container) => {
                container.measured_width_px = measured_width_px;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    /// Like [`Document::container`], for callers that treat absence as an error.
    pub fn require_container(&self, id: &str) -> ChartResult<&Container> {
        self.containers
            .get(id)
            .ok_or_else(|| ChartError::ContainerMissing(id.to_owned()))
    }

    #[must_use]
    pub fn measured_width(&self, id: &str) -> Option<f64> {
        self.containers.get(id).map(Container::measured_width_px)
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    /// Every live floating tooltip, with its owning container id.
    #[must_use]
    pub fn floating_tooltips(&self) -> Vec<(&str, &FloatingTooltip)> {
        self.containers
            .values()
            .filter_map(|container| {
                container
                    .tooltip
                    .active()
                    .map(|tooltip| (container.id(), tooltip))
            })
            .collect()
    }
}
