use std::rc::Rc;

use chrono::NaiveDateTime;

use crate::{
    animation::tween::{Animator, Timeline, TweenId, TweenRequest},
    clock::wall::WallClock,
    dom::document::{Document, ElementId},
    foundation::core::{Millis, Point},
    host::{
        events::{EventKind, Handler, ListenerId, Listeners, PointerEvent},
        timers::{TimerCallback, TimerId, Timers},
    },
};

/// Single-threaded host environment: the element tree plus everything that
/// can call back into it (pointer listeners, interval timers, tweens).
///
/// Every callback runs to completion before the next one starts; nothing
/// here is shared across threads.
pub struct Page {
    doc: Document,
    animator: Box<dyn Animator>,
    listeners: Listeners,
    timers: Timers,
    now: Millis,
    wall: WallClock,
    hovered: Vec<ElementId>,
    pointer: Point,
}

impl Page {
    /// Empty page driven by a [`Timeline`].
    pub fn new(wall: WallClock) -> Self {
        Self::with_animator(wall, Box::new(Timeline::new()))
    }

    /// Empty page with a custom tween engine.
    pub fn with_animator(wall: WallClock, animator: Box<dyn Animator>) -> Self {
        Self {
            doc: Document::new(),
            animator,
            listeners: Listeners::default(),
            timers: Timers::default(),
            now: Millis::ZERO,
            wall,
            hovered: Vec::new(),
            pointer: Point::ZERO,
        }
    }

    /// The element tree.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// Mutable access to the element tree.
    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// The tween engine.
    pub fn animator(&self) -> &dyn Animator {
        self.animator.as_ref()
    }

    /// Virtual time elapsed since the page was created.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Wall-clock instant at the current virtual time.
    pub fn wall_time(&self) -> NaiveDateTime {
        self.wall.at(self.now)
    }

    /// Hand a tween request to the animator.
    pub fn animate(&mut self, req: TweenRequest) -> TweenId {
        self.animator.to(req)
    }

    /// Register `handler` for `kind` events on `element`.
    pub fn add_listener(
        &mut self,
        element: ElementId,
        kind: EventKind,
        handler: impl Fn(&mut Page, &PointerEvent) + 'static,
    ) -> ListenerId {
        let handler: Handler = Rc::new(handler);
        self.listeners.add(element, kind, handler)
    }

    /// Unregister a listener; `false` if it was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Listeners registered on any element.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listeners registered on `element`.
    pub fn listeners_on(&self, element: ElementId) -> usize {
        self.listeners.count_on(element)
    }

    /// Run `callback` every `period` of virtual time, first at `now + period`.
    ///
    /// A zero period is treated as 1 ms.
    pub fn set_interval(
        &mut self,
        period: Millis,
        callback: impl Fn(&mut Page) + 'static,
    ) -> TimerId {
        let callback: TimerCallback = Rc::new(callback);
        let id = self.timers.set_interval(self.now, period, callback);
        tracing::debug!(timer = id.0, period_ms = period.0, "interval scheduled");
        id
    }

    /// Cancel an interval; `false` if it was already gone.
    pub fn clear_interval(&mut self, id: TimerId) -> bool {
        let removed = self.timers.clear(id);
        if removed {
            tracing::debug!(timer = id.0, "interval cleared");
        }
        removed
    }

    /// Live intervals.
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether interval `id` is still scheduled.
    pub fn has_timer(&self, id: TimerId) -> bool {
        self.timers.contains(id)
    }

    /// Move virtual time forward by `dt`.
    ///
    /// Interval callbacks fire at their due instants in order; tweens are
    /// stepped up to each instant before the callback runs.
    pub fn advance(&mut self, dt: Millis) {
        let end = self.now.saturating_add(dt);
        while let Some((due, _id, callback)) = self.timers.take_due(end) {
            self.step_tweens_to(due);
            callback(self);
        }
        self.step_tweens_to(end);
    }

    fn step_tweens_to(&mut self, at: Millis) {
        let step = at.saturating_sub(self.now);
        self.animator.advance(&mut self.doc, step);
        self.now = self.now.max(at);
    }

    /// Deliver `event` to `target`, bubbling through ancestors when the
    /// event kind bubbles. Listeners removed mid-dispatch do not run.
    pub fn dispatch(&mut self, target: ElementId, event: PointerEvent) {
        let path = if event.kind.bubbles() {
            self.doc.ancestors(target)
        } else {
            vec![target]
        };
        for el in path {
            for (id, handler) in self.listeners.handlers_for(el, event.kind) {
                if self.listeners.contains(id) {
                    handler(self, &event);
                }
            }
        }
    }

    /// Move the pointer to `point`.
    ///
    /// Elements that were under the pointer and no longer are receive a
    /// pointer-leave; the element now under the pointer receives a
    /// (bubbling) pointer-move.
    pub fn pointer_move(&mut self, point: Point) {
        let target = self.doc.hit_test(point);
        let path = target.map(|t| self.doc.ancestors(t)).unwrap_or_default();
        let left: Vec<ElementId> = self
            .hovered
            .iter()
            .copied()
            .filter(|el| !path.contains(el))
            .collect();
        self.hovered = path;
        self.pointer = point;
        tracing::trace!(
            x = point.x,
            y = point.y,
            hit = ?target,
            left = left.len(),
            "pointer move"
        );

        for el in left {
            self.dispatch(el, leave_event(point, el));
        }
        if let Some(t) = target {
            self.dispatch(
                t,
                PointerEvent {
                    kind: EventKind::PointerMove,
                    client: point,
                    target: t,
                },
            );
        }
    }

    /// The pointer left the page entirely.
    pub fn pointer_exit(&mut self) {
        let left = std::mem::take(&mut self.hovered);
        let point = self.pointer;
        for el in left {
            self.dispatch(el, leave_event(point, el));
        }
    }

    /// Elements currently under the pointer, deepest first.
    pub fn hovered(&self) -> &[ElementId] {
        &self.hovered
    }
}

fn leave_event(client: Point, target: ElementId) -> PointerEvent {
    PointerEvent {
        kind: EventKind::PointerLeave,
        client,
        target,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/page.rs"]
mod tests;
