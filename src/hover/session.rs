use std::rc::Rc;

use crate::{
    animation::{ease::Ease, tween::TweenRequest},
    dom::document::ElementId,
    foundation::core::{Millis, Rect, WeightRange},
    host::{
        events::{EventKind, ListenerId},
        page::Page,
    },
    hover::intensity::{glyph_center, target_weight},
};

/// Tween length toward a proximity weight.
pub const MOVE_DURATION: Millis = Millis(250);
/// Tween length back to the resting weight.
pub const LEAVE_DURATION: Millis = Millis(300);

/// Per-block hover parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverConfig {
    /// Weight limits and resting weight.
    pub range: WeightRange,
    /// Tween length on pointer move.
    pub move_duration: Millis,
    /// Tween length on pointer leave.
    pub leave_duration: Millis,
    /// Curve for both tweens.
    pub ease: Ease,
}

impl HoverConfig {
    /// Stock durations and `power2.out` easing.
    pub fn new(range: WeightRange) -> Self {
        Self {
            range,
            move_duration: MOVE_DURATION,
            leave_duration: LEAVE_DURATION,
            ease: Ease::DECELERATE,
        }
    }
}

/// Handle for the listeners installed by [`attach_hover`].
///
/// Dropping it without calling [`Disposer::dispose`] leaves the listeners
/// attached.
#[must_use = "listeners stay attached until the disposer runs"]
#[derive(Debug)]
pub struct Disposer {
    listeners: Vec<ListenerId>,
}

impl Disposer {
    /// Remove both listeners.
    pub fn dispose(self, page: &mut Page) {
        for id in self.listeners {
            page.remove_listener(id);
        }
    }
}

/// Install pointer-move and pointer-leave listeners on `container` that
/// animate `glyphs` toward their proximity weight.
///
/// A missing container is not an error: nothing is attached and `None`
/// comes back.
pub fn attach_hover(
    page: &mut Page,
    container: Option<ElementId>,
    glyphs: Rc<[ElementId]>,
    config: HoverConfig,
) -> Option<Disposer> {
    let container = container?;

    let move_glyphs = Rc::clone(&glyphs);
    let on_move = page.add_listener(container, EventKind::PointerMove, move |page, ev| {
        let boxes = geometry(page, container, &move_glyphs);
        let pointer_x = ev.client.x - boxes.container.x0;
        tracing::trace!(container = container.index(), pointer_x, "hover move");
        for (&glyph, rect) in move_glyphs.iter().zip(boxes.glyphs) {
            let center = glyph_center(boxes.container, rect);
            page.animate(TweenRequest {
                target: glyph,
                duration: config.move_duration,
                ease: config.ease,
                weight: target_weight(&config.range, pointer_x, center),
            });
        }
    });

    let on_leave = page.add_listener(container, EventKind::PointerLeave, move |page, _ev| {
        tracing::trace!(container = container.index(), "hover leave");
        for &glyph in glyphs.iter() {
            page.animate(TweenRequest {
                target: glyph,
                duration: config.leave_duration,
                ease: config.ease,
                weight: config.range.default,
            });
        }
    });

    Some(Disposer {
        listeners: vec![on_move, on_leave],
    })
}

struct Geometry {
    container: Rect,
    glyphs: Vec<Rect>,
}

// Read live on every event so relayouts mid-session are picked up.
// Unlaid-out elements measure as an empty box at the origin.
fn geometry(page: &Page, container: ElementId, glyphs: &[ElementId]) -> Geometry {
    let doc = page.doc();
    Geometry {
        container: doc.rect(container).unwrap_or(Rect::ZERO),
        glyphs: glyphs
            .iter()
            .map(|&g| doc.rect(g).unwrap_or(Rect::ZERO))
            .collect(),
    }
}

/// Whether a [`HoverSession`] currently has listeners installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No listeners installed.
    Detached,
    /// Move and leave listeners installed on the container.
    Attached,
}

/// Attach/detach lifecycle of one block's hover listeners.
#[derive(Debug)]
pub struct HoverSession {
    config: HoverConfig,
    container: Option<ElementId>,
    glyphs: Rc<[ElementId]>,
    disposer: Option<Disposer>,
}

impl HoverSession {
    /// Detached session over `container` and its `glyphs`.
    pub fn new(config: HoverConfig, container: Option<ElementId>, glyphs: Vec<ElementId>) -> Self {
        Self {
            config,
            container,
            glyphs: glyphs.into(),
            disposer: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        match self.disposer {
            Some(_) => SessionState::Attached,
            None => SessionState::Detached,
        }
    }

    /// Hover parameters.
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    /// Element the listeners go on.
    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    /// Glyph spans, in reading order.
    pub fn glyphs(&self) -> &[ElementId] {
        &self.glyphs
    }

    /// `Detached -> Attached` when a container exists; otherwise stays
    /// detached. Attaching twice keeps the original listeners.
    pub fn attach(&mut self, page: &mut Page) {
        if self.disposer.is_some() {
            return;
        }
        self.disposer = attach_hover(
            page,
            self.container,
            Rc::clone(&self.glyphs),
            self.config,
        );
        match self.container {
            Some(c) if self.disposer.is_some() => {
                tracing::debug!(
                    container = c.index(),
                    glyphs = self.glyphs.len(),
                    "hover attached"
                );
            }
            _ => tracing::debug!("hover skipped: no container"),
        }
    }

    /// `Attached -> Detached`. In-flight tweens are left to finish.
    pub fn detach(&mut self, page: &mut Page) {
        if let Some(disposer) = self.disposer.take() {
            disposer.dispose(page);
            tracing::debug!(container = ?self.container.map(ElementId::index), "hover detached");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hover/session.rs"]
mod tests;
