use crate::{
    animation::ease::Ease,
    dom::document::{Document, ElementId},
    foundation::core::Millis,
};

/// Handle returned by [`Animator::to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u64);

/// "Animate `target`'s weight to `weight` over `duration` with `ease`."
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenRequest {
    /// Element whose weight is animated.
    pub target: ElementId,
    /// Total tween time; zero snaps on the next step.
    pub duration: Millis,
    /// Curve applied to linear progress.
    pub ease: Ease,
    /// End weight.
    pub weight: f64,
}

/// Tween engine seam.
///
/// Callers fire requests and never wait on the returned handle; the host
/// drives progress by calling [`Animator::advance`] as virtual time moves.
pub trait Animator {
    /// Start tweening `req.target`, replacing any tween already on it.
    fn to(&mut self, req: TweenRequest) -> TweenId;

    /// Step every in-flight tween by `dt` and write weights into `doc`.
    fn advance(&mut self, doc: &mut Document, dt: Millis);

    /// End value of the in-flight tween on `target`, if any.
    fn target_of(&self, target: ElementId) -> Option<f64>;

    /// Number of in-flight tweens.
    fn active(&self) -> usize;
}

#[derive(Clone, Debug)]
struct Tween {
    id: TweenId,
    req: TweenRequest,
    // Captured on the first step, like a lazily-rendered `to` tween.
    from: Option<f64>,
    elapsed: Millis,
}

/// Default [`Animator`]: eased weight tweens written back into the document.
///
/// A request for an element that already has an in-flight tween replaces
/// it; the new tween starts from whatever weight the element shows at its
/// first step.
#[derive(Debug, Default)]
pub struct Timeline {
    next_id: u64,
    tweens: Vec<Tween>,
}

impl Timeline {
    /// Timeline with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator for Timeline {
    fn to(&mut self, req: TweenRequest) -> TweenId {
        self.next_id += 1;
        let id = TweenId(self.next_id);
        self.tweens.retain(|t| t.req.target != req.target);
        tracing::trace!(
            target_el = req.target.index(),
            weight = req.weight,
            duration_ms = req.duration.0,
            ease = req.ease.name(),
            "tween requested"
        );
        self.tweens.push(Tween {
            id,
            req,
            from: None,
            elapsed: Millis::ZERO,
        });
        id
    }

    fn advance(&mut self, doc: &mut Document, dt: Millis) {
        if dt == Millis::ZERO {
            return;
        }
        for tween in &mut self.tweens {
            let from = *tween
                .from
                .get_or_insert_with(|| doc.weight(tween.req.target).unwrap_or(tween.req.weight));
            tween.elapsed = tween.elapsed.saturating_add(dt);

            let t = if tween.req.duration == Millis::ZERO {
                1.0
            } else {
                tween.elapsed.as_secs_f64() / tween.req.duration.as_secs_f64()
            };
            let value = if t >= 1.0 {
                tween.req.weight
            } else {
                mix(from, tween.req.weight, tween.req.ease.apply(t))
            };
            doc.set_weight(tween.req.target, value);
        }
        self.tweens.retain(|t| t.elapsed < t.req.duration);
    }

    fn target_of(&self, target: ElementId) -> Option<f64> {
        self.tweens
            .iter()
            .find(|t| t.req.target == target)
            .map(|t| t.req.weight)
    }

    fn active(&self) -> usize {
        self.tweens.len()
    }
}

impl Timeline {
    /// Whether tween `id` is still in flight.
    pub fn is_running(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }
}

fn mix(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
