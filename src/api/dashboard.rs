use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::{ProjectResult, XpRecord};
use crate::document::{Container, ContainerContent, Document, RenderedChart};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FloatingTooltip, ResizeCoordinator};

use super::{DashboardConfig, LineChartState, build_donut_chart, build_line_chart};

/// What a render call left in its container.
///
/// Purely informational: render calls never fail toward the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered,
    Placeholder(ChartError),
    ContainerMissing,
}

impl RenderOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// Chart manager: owns the document, the resize registry and the config.
#[derive(Debug)]
pub struct Dashboard {
    document: Document,
    resize: ResizeCoordinator,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> ChartResult<Self> {
        Self::with_document(Document::new(), config)
    }

    pub fn with_document(document: Document, config: DashboardConfig) -> ChartResult<Self> {
        config.validate()?;
        let resize = ResizeCoordinator::new(Duration::from_millis(config.resize_debounce_ms));
        Ok(Self {
            document,
            resize,
            config,
        })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn resize_handler_count(&self) -> usize {
        self.resize.handler_count()
    }

    #[must_use]
    pub fn has_resize_handler(&self, container_id: &str) -> bool {
        self.resize.has_handler(container_id)
    }

    /// Renders the cumulative XP chart into `container_id`, replacing any
    /// previous content and resize handler of that container.
    pub fn render_line_chart(&mut self, data: &[XpRecord], container_id: &str) -> RenderOutcome {
        if self.document.container(container_id).is_none() {
            debug!(container = container_id, "line chart target missing");
            return RenderOutcome::ContainerMissing;
        }
        self.resize.deregister(container_id);

        let outcome = draw_line_chart(&mut self.document, container_id, data, &self.config);
        if outcome.is_rendered() {
            let built_width = self
                .document
                .measured_width(container_id)
                .unwrap_or_default();
            let records = data.to_vec();
            let config = self.config.clone();
            let id = container_id.to_owned();
            self.resize.register_or_replace(
                container_id,
                built_width,
                Box::new(move |document: &mut Document| {
                    draw_line_chart(document, &id, &records, &config);
                }),
            );
        }
        outcome
    }

    /// Renders the pass/fail donut into `container_id`. The donut has a fixed
    /// canvas and never registers a resize handler.
    pub fn render_donut_chart(
        &mut self,
        data: &[ProjectResult],
        container_id: &str,
    ) -> RenderOutcome {
        let Some(container) = self.document.container_mut(container_id) else {
            debug!(container = container_id, "donut chart target missing");
            return RenderOutcome::ContainerMissing;
        };
        self.resize.deregister(container_id);
        container.clear();

        let built = build_donut_chart(
            data,
            container.measured_width_px(),
            &self.config.layout,
            &self.config.donut,
        );
        attach_or_placeholder(
            container,
            built,
            &self.config.donut.empty_message,
            &self.config.error_message,
        )
    }

    /// Viewport resize signal; restarts every chart's debounce window.
    pub fn viewport_resized(&mut self, now: Instant) {
        self.resize.viewport_resized(now);
    }

    /// Runs debounced rebuilds that are due at `now`. Returns the number of
    /// charts rebuilt.
    pub fn advance(&mut self, now: Instant) -> usize {
        self.resize.advance(now, &mut self.document).len()
    }

    /// Shows the tooltip of one marker, replacing any tooltip already shown
    /// in that container.
    pub fn pointer_enter(
        &mut self,
        container_id: &str,
        marker_index: usize,
    ) -> Option<&FloatingTooltip> {
        let offset = self.config.line.tooltip_offset_px;
        let container = self.document.container_mut(container_id)?;
        let target = container.chart()?.hover_targets.get(marker_index)?.clone();
        Some(
            container
                .tooltip_mut()
                .hover_enter(marker_index, &target, offset),
        )
    }

    /// Removes the container's tooltip. Returns `true` when one was shown.
    pub fn pointer_leave(&mut self, container_id: &str) -> bool {
        self.document
            .container_mut(container_id)
            .and_then(|container| container.tooltip_mut().hover_leave())
            .is_some()
    }

    /// Lifecycle state of the line chart in `container_id`.
    #[must_use]
    pub fn line_chart_state(&self, container_id: &str) -> Option<LineChartState> {
        let container = self.document.container(container_id)?;
        match container.content() {
            ContainerContent::Chart(_) => {}
            ContainerContent::Placeholder(_) => return Some(LineChartState::Empty),
            ContainerContent::Empty => return None,
        }
        let Some(built_width) = self.resize.built_width(container_id) else {
            return Some(LineChartState::Built);
        };
        if built_width == container.measured_width_px() {
            Some(LineChartState::Attached)
        } else {
            Some(LineChartState::Stale)
        }
    }
}

/// Clears `container_id` and draws the line chart or its placeholder.
fn draw_line_chart(
    document: &mut Document,
    container_id: &str,
    data: &[XpRecord],
    config: &DashboardConfig,
) -> RenderOutcome {
    let Some(container) = document.container_mut(container_id) else {
        return RenderOutcome::ContainerMissing;
    };
    container.clear();

    let built = build_line_chart(
        data,
        container.measured_width_px(),
        &config.layout,
        &config.line,
    );
    attach_or_placeholder(
        container,
        built,
        &config.line.empty_message,
        &config.error_message,
    )
}

fn attach_or_placeholder(
    container: &mut Container,
    built: ChartResult<RenderedChart>,
    empty_message: &str,
    error_message: &str,
) -> RenderOutcome {
    let container_id = container.id().to_owned();
    match built {
        Ok(chart) => {
            container.attach_chart(chart);
            debug!(container = %container_id, "chart attached");
            RenderOutcome::Rendered
        }
        Err(ChartError::EmptyInput) => {
            container.set_placeholder(empty_message);
            debug!(container = %container_id, "empty input, placeholder shown");
            RenderOutcome::Placeholder(ChartError::EmptyInput)
        }
        Err(err) => {
            container.set_placeholder(error_message);
            warn!(container = %container_id, error = %err, "chart degraded to placeholder");
            RenderOutcome::Placeholder(err)
        }
    }
}
