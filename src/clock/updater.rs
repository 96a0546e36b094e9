use crate::{
    clock::format::format_timestamp,
    dom::document::ElementId,
    foundation::core::Millis,
    host::{page::Page, timers::TimerId},
};

/// Refresh period of the navbar clock.
pub const TICK: Millis = Millis(1000);

/// Lifecycle state of a [`ClockUpdater`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockPhase {
    /// No interval scheduled.
    Idle,
    /// Refreshing every [`TICK`].
    Running,
}

/// Keeps a `<time>` element showing the page's wall-clock time.
///
/// Owns at most one interval: starting an already running updater is a
/// no-op, so repeated renders never stack timers.
#[derive(Debug)]
pub struct ClockUpdater {
    display: ElementId,
    timer: Option<TimerId>,
}

impl ClockUpdater {
    /// Idle updater writing into `display`.
    pub fn new(display: ElementId) -> Self {
        Self {
            display,
            timer: None,
        }
    }

    /// Current lifecycle state.
    pub fn phase(&self) -> ClockPhase {
        match self.timer {
            Some(_) => ClockPhase::Running,
            None => ClockPhase::Idle,
        }
    }

    /// The `<time>` element being updated.
    pub fn display(&self) -> ElementId {
        self.display
    }

    /// The live interval, while running.
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// `Idle -> Running`: show the current time, then refresh every tick.
    pub fn start(&mut self, page: &mut Page) {
        if self.timer.is_some() {
            return;
        }
        refresh(page, self.display);
        let display = self.display;
        let id = page.set_interval(TICK, move |page| refresh(page, display));
        tracing::debug!(timer = id.0, "clock running");
        self.timer = Some(id);
    }

    /// `Running -> Idle`: cancel the interval.
    pub fn stop(&mut self, page: &mut Page) {
        if let Some(id) = self.timer.take() {
            page.clear_interval(id);
            tracing::debug!(timer = id.0, "clock idle");
        }
    }

    /// Redraw the current time without touching the schedule.
    pub fn redraw(&self, page: &mut Page) {
        refresh(page, self.display);
    }
}

fn refresh(page: &mut Page, display: ElementId) {
    let text = format_timestamp(&page.wall_time());
    page.doc_mut().set_text(display, text);
}

#[cfg(test)]
#[path = "../../tests/unit/clock/updater.rs"]
mod tests;
