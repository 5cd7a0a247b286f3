use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::document::Document;

/// Explicit debounce timer: each signal restarts the quiet window and the
/// timer fires once after the window elapses without further signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    #[must_use]
    pub fn window(self) -> Duration {
        self.window
    }

    /// Cancels any pending fire and restarts the window at `now`.
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Rebuilds a container's chart from its original input.
pub type RedrawFn = Box<dyn FnMut(&mut Document)>;

struct ResizeRegistration {
    timer: DebounceTimer,
    built_width_px: f64,
    redraw: RedrawFn,
}

/// Owns the one resize handler allowed per container.
pub struct ResizeCoordinator {
    debounce: Duration,
    handlers: IndexMap<String, ResizeRegistration>,
}

impl std::fmt::Debug for ResizeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeCoordinator")
            .field("debounce", &self.debounce)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ResizeCoordinator {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            handlers: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Installs `redraw` for `container_id`, deregistering any previous
    /// handler first. Returns `true` when a handler was replaced.
    pub fn register_or_replace(
        &mut self,
        container_id: &str,
        built_width_px: f64,
        redraw: RedrawFn,
    ) -> bool {
        let replaced = self.deregister(container_id);
        self.handlers.insert(
            container_id.to_owned(),
            ResizeRegistration {
                timer: DebounceTimer::new(self.debounce),
                built_width_px,
                redraw,
            },
        );
        debug!(container = container_id, replaced, "resize handler registered");
        replaced
    }

    /// Removes the handler for `container_id`. Returns `true` when one existed.
    pub fn deregister(&mut self, container_id: &str) -> bool {
        let removed = self.handlers.shift_remove(container_id).is_some();
        if removed {
            trace!(container = container_id, "resize handler deregistered");
        }
        removed
    }

    #[must_use]
    pub fn has_handler(&self, container_id: &str) -> bool {
        self.handlers.contains_key(container_id)
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Width the container measured when its chart was last built.
    #[must_use]
    pub fn built_width(&self, container_id: &str) -> Option<f64> {
        self.handlers
            .get(container_id)
            .map(|registration| registration.built_width_px)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.handlers
            .values()
            .filter(|registration| registration.timer.is_pending())
            .count()
    }

    /// Viewport resize signal: restarts every handler's debounce window.
    pub fn viewport_resized(&mut self, now: Instant) {
        for registration in self.handlers.values_mut() {
            registration.timer.signal(now);
        }
        trace!(handlers = self.handlers.len(), "viewport resize signalled");
    }

    /// Fires elapsed timers. A handler redraws only when its container's
    /// measured width differs from the width it was built at.
    ///
    /// Returns the ids of redrawn containers. Handlers whose container no
    /// longer exists are dropped.
    pub fn advance(&mut self, now: Instant, document: &mut Document) -> Vec<String> {
        let mut redrawn = Vec::new();
        let mut orphaned = Vec::new();

        for (container_id, registration) in &mut self.handlers {
            if !registration.timer.poll(now) {
                continue;
            }

            let Some(measured) = document.measured_width(container_id) else {
                orphaned.push(container_id.clone());
                continue;
            };

            if measured == registration.built_width_px {
                trace!(container = %container_id, width = measured, "resize without width change");
                continue;
            }

            debug!(
                container = %container_id,
                from = registration.built_width_px,
                to = measured,
                "rebuilding chart after resize"
            );
            (registration.redraw)(document);
            registration.built_width_px = measured;
            redrawn.push(container_id.clone());
        }

        for container_id in orphaned {
            self.deregister(&container_id);
        }
        redrawn
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use super::{DebounceTimer, ResizeCoordinator};
    use crate::document::Document;

    #[test]
    fn timer_fires_once_after_quiet_window() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(Duration::from_millis(250));
        timer.signal(start);
        assert!(!timer.poll(start + Duration::from_millis(249)));
        assert!(timer.poll(start + Duration::from_millis(250)));
        assert!(!timer.poll(start + Duration::from_millis(400)));
    }

    #[test]
    fn new_signal_postpones_fire() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(Duration::from_millis(250));
        timer.signal(start);
        timer.signal(start + Duration::from_millis(200));
        assert!(!timer.poll(start + Duration::from_millis(300)));
        assert!(timer.poll(start + Duration::from_millis(450)));
    }

    #[test]
    fn cancel_drops_pending_fire() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(Duration::from_millis(250));
        timer.signal(start);
        assert!(timer.is_pending());
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn pending_count_follows_signals_and_fires() {
        let mut document = Document::new();
        document.add_container("xp", 800.0);
        document.add_container("xp-mobile", 400.0);
        let mut coordinator = ResizeCoordinator::new(Duration::from_millis(250));
        coordinator.register_or_replace("xp", 800.0, Box::new(|_| {}));
        coordinator.register_or_replace("xp-mobile", 400.0, Box::new(|_| {}));
        assert_eq!(coordinator.pending_count(), 0);

        let start = Instant::now();
        coordinator.viewport_resized(start);
        assert_eq!(coordinator.pending_count(), 2);

        coordinator.advance(start + Duration::from_millis(100), &mut document);
        assert_eq!(coordinator.pending_count(), 2);
        coordinator.advance(start + Duration::from_millis(250), &mut document);
        assert_eq!(coordinator.pending_count(), 0);
    }

    #[test]
    fn replacing_keeps_single_handler() {
        let mut coordinator = ResizeCoordinator::new(Duration::from_millis(250));
        assert!(!coordinator.register_or_replace("xp", 800.0, Box::new(|_| {})));
        assert!(coordinator.register_or_replace("xp", 800.0, Box::new(|_| {})));
        assert_eq!(coordinator.handler_count(), 1);
    }

    #[test]
    fn redraw_runs_only_on_width_change() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut document = Document::new();
        document.add_container("xp", 800.0);

        let mut coordinator = ResizeCoordinator::new(Duration::from_millis(250));
        coordinator.register_or_replace(
            "xp",
            800.0,
            Box::new(move |_| counter.set(counter.get() + 1)),
        );

        let start = Instant::now();
        coordinator.viewport_resized(start);
        coordinator.advance(start + Duration::from_millis(300), &mut document);
        assert_eq!(calls.get(), 0);

        document.set_container_width("xp", 600.0);
        coordinator.viewport_resized(start + Duration::from_secs(1));
        let redrawn = coordinator.advance(start + Duration::from_millis(1300), &mut document);
        assert_eq!(redrawn, vec!["xp".to_owned()]);
        assert_eq!(calls.get(), 1);
        assert_eq!(coordinator.built_width("xp"), Some(600.0));
    }

    #[test]
    fn handlers_of_removed_containers_are_dropped() {
        let mut document = Document::new();
        let mut coordinator = ResizeCoordinator::new(Duration::from_millis(250));
        coordinator.register_or_replace("gone", 500.0, Box::new(|_| {}));

        let start = Instant::now();
        coordinator.viewport_resized(start);
        coordinator.advance(start + Duration::from_millis(250), &mut document);
        assert_eq!(coordinator.handler_count(), 0);
    }
}
