//! Virtual-clock scheduler for time-deferred session events.
//!
//! Events are scheduled relative to the scheduler's own clock, which only
//! moves when the owner advances it. Every scheduled event gets a
//! [`TaskHandle`]; cancelling the handle guarantees the event never fires.

use std::time::Duration;

/// Identifies one scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    id: u64,
    due: Duration,
    event: E,
}

/// Single-threaded queue of delayed events ordered by due time.
///
/// Events due at the same instant fire in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `event` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            event,
        });
        TaskHandle(id)
    }

    /// Cancels a scheduled event. Returns `false` if it already fired or
    /// was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.iter().position(|p| p.id == handle.0) {
            Some(idx) => {
                self.pending.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the earliest event due no later than `deadline`,
    /// moving the clock to that event's due time.
    ///
    /// Owners call this in a loop so that events scheduled while handling
    /// an earlier one are timed from the instant it fired.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<E> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(idx, _)| idx)?;
        let pending = self.pending.swap_remove(idx);
        self.now = self.now.max(pending.due);
        Some(pending.event)
    }

    /// Moves the clock forward to `time` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, deadline: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(event) = scheduler.pop_due(deadline) {
            fired.push(event);
        }
        scheduler.advance_to(deadline);
        fired
    }

    #[test]
    fn fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "c");
        scheduler.schedule(ms(100), "a");
        scheduler.schedule(ms(200), "b");

        assert_eq!(drain(&mut scheduler, ms(250)), vec!["a", "b"]);
        assert_eq!(scheduler.now(), ms(250));
        assert_eq!(drain(&mut scheduler, ms(300)), vec!["c"]);
        assert!(drain(&mut scheduler, ms(10_000)).is_empty());
    }

    #[test]
    fn ties_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), "first");
        scheduler.schedule(ms(10), "second");
        scheduler.schedule(ms(10), "third");
        assert_eq!(drain(&mut scheduler, ms(10)), vec!["first", "second", "third"]);
    }

    #[test]
    fn cancelled_events_never_fire() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(ms(10), "keep");
        let dropped = scheduler.schedule(ms(5), "drop");

        assert!(scheduler.cancel(dropped));
        assert!(!scheduler.cancel(dropped));

        assert_eq!(drain(&mut scheduler, ms(100)), vec!["keep"]);
        // Already fired
        assert!(!scheduler.cancel(keep));
    }

    #[test]
    fn pop_due_moves_clock_to_event_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "a");

        assert_eq!(scheduler.pop_due(ms(1000)), Some("a"));
        assert_eq!(scheduler.now(), ms(100));

        // Scheduled relative to the instant "a" fired
        scheduler.schedule(ms(100), "b");
        assert_eq!(scheduler.pop_due(ms(199)), None);
        assert_eq!(scheduler.pop_due(ms(200)), Some("b"));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance_to(ms(50));
        scheduler.advance_to(ms(10));
        assert_eq!(scheduler.now(), ms(50));
    }
}
