use std::rc::Rc;

use crate::{dom::document::ElementId, foundation::core::Point, host::page::Page};

/// Pointer event types delivered to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer moved over an element; bubbles to ancestors.
    PointerMove,
    /// Pointer left an element; delivered to that element only.
    PointerLeave,
}

impl EventKind {
    /// Whether dispatch continues through ancestors.
    pub fn bubbles(self) -> bool {
        matches!(self, Self::PointerMove)
    }
}

/// A pointer event as seen by a listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event type.
    pub kind: EventKind,
    /// Pointer position in page coordinates.
    pub client: Point,
    /// Element the event was originally dispatched to.
    pub target: ElementId,
}

/// Handle returned by [`Page::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Listener callback.
pub type Handler = Rc<dyn Fn(&mut Page, &PointerEvent)>;

struct Entry {
    id: ListenerId,
    element: ElementId,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Listeners {
    pub(crate) fn add(
        &mut self,
        element: ElementId,
        kind: EventKind,
        handler: Handler,
    ) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Entry {
            id,
            element,
            kind,
            handler,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Handlers registered on `element` for `kind`, in registration order.
    ///
    /// Cloned out so a handler may add or remove listeners while running.
    pub(crate) fn handlers_for(
        &self,
        element: ElementId,
        kind: EventKind,
    ) -> Vec<(ListenerId, Handler)> {
        self.entries
            .iter()
            .filter(|e| e.element == element && e.kind == kind)
            .map(|e| (e.id, Rc::clone(&e.handler)))
            .collect()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn count_on(&self, element: ElementId) -> usize {
        self.entries.iter().filter(|e| e.element == element).count()
    }
}
