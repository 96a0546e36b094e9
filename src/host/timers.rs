use std::rc::Rc;

use crate::{foundation::core::Millis, host::page::Page};

/// Handle returned by [`Page::set_interval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Interval callback.
pub type TimerCallback = Rc<dyn Fn(&mut Page)>;

struct Interval {
    id: TimerId,
    period: Millis,
    next_due: Millis,
    callback: TimerCallback,
}

/// Recurring timers keyed by due instant.
#[derive(Default)]
pub(crate) struct Timers {
    next_id: u64,
    intervals: Vec<Interval>,
}

impl Timers {
    pub(crate) fn set_interval(
        &mut self,
        now: Millis,
        period: Millis,
        callback: TimerCallback,
    ) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let period = period.max(Millis(1));
        self.intervals.push(Interval {
            id,
            period,
            next_due: now.saturating_add(period),
            callback,
        });
        id
    }

    pub(crate) fn clear(&mut self, id: TimerId) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|i| i.id != id);
        self.intervals.len() != before
    }

    /// Earliest interval due at or before `until`, rescheduled one period
    /// later. Ties fire in scheduling order.
    pub(crate) fn take_due(
        &mut self,
        until: Millis,
    ) -> Option<(Millis, TimerId, TimerCallback)> {
        let interval = self
            .intervals
            .iter_mut()
            .filter(|i| i.next_due <= until)
            .min_by_key(|i| (i.next_due, i.id))?;
        let due = interval.next_due;
        interval.next_due = due.saturating_add(interval.period);
        Some((due, interval.id, Rc::clone(&interval.callback)))
    }

    pub(crate) fn contains(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|i| i.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.intervals.len()
    }
}
