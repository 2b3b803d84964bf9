//! Queue of timed steps.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// A step waiting for its deadline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Pending<S> {
    due: Duration,
    step: S,
}

/// Ordered queue of `(deadline, step)` pairs on a virtual clock.
///
/// ## Behavior
///
/// - `schedule()`: Adds a step due `delay` after the current clock
/// - `advance()`: Moves the clock forward
/// - `pop_due()`: Takes the next step whose deadline has passed; callers
///   loop on it so steps can schedule further zero-delay steps
/// - Steps with equal deadlines come out in the order they were scheduled
/// - Nothing is ever cancelled except by `clear()`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler<S> {
    now: Duration,
    pending: VecDeque<Pending<S>>,
}

impl<S> Default for Scheduler<S> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            pending: VecDeque::new(),
        }
    }
}

impl<S> Scheduler<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `step` to run `delay` from now.
    pub fn schedule(&mut self, delay: Duration, step: S) {
        let due = self.now + delay;
        // Insert after every entry due at or before `due` to keep FIFO order.
        let at = self.pending.partition_point(|p| p.due <= due);
        self.pending.insert(at, Pending { due, step });
    }

    /// Move the clock forward without taking any step.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
    }

    /// Take the next step whose deadline has passed, if any.
    pub fn pop_due(&mut self) -> Option<S> {
        match self.pending.front() {
            Some(p) if p.due <= self.now => self.pending.pop_front().map(|p| p.step),
            _ => None,
        }
    }

    /// Time until the next step is due. `None` when idle.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|p| p.due.saturating_sub(self.now))
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending step.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Advance and collect everything that came due.
    fn run<S>(scheduler: &mut Scheduler<S>, dt: Duration) -> Vec<S> {
        scheduler.advance(dt);
        std::iter::from_fn(|| scheduler.pop_due()).collect()
    }

    #[test]
    fn test_new_is_idle() {
        let scheduler: Scheduler<u32> = Scheduler::new();
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.next_due_in(), None);
    }

    #[test]
    fn test_steps_fire_at_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(100), "a");

        assert!(run(&mut scheduler, ms(99)).is_empty());
        assert_eq!(scheduler.next_due_in(), Some(ms(1)));
        assert_eq!(run(&mut scheduler, ms(1)), vec!["a"]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(30), 3);
        scheduler.schedule(ms(10), 1);
        scheduler.schedule(ms(20), 2);

        assert_eq!(run(&mut scheduler, ms(100)), vec![1, 2, 3]);
    }

    #[test]
    fn test_fifo_for_equal_deadlines() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), 'a');
        scheduler.schedule(ms(10), 'b');
        scheduler.schedule(Duration::ZERO, 'z');
        scheduler.schedule(ms(10), 'c');

        assert_eq!(run(&mut scheduler, ms(10)), vec!['z', 'a', 'b', 'c']);
    }

    #[test]
    fn test_delay_is_relative_to_clock() {
        let mut scheduler = Scheduler::new();
        run(&mut scheduler, ms(500));
        scheduler.schedule(ms(50), 1);

        assert_eq!(scheduler.now(), ms(500));
        assert!(run(&mut scheduler, ms(49)).is_empty());
        assert_eq!(run(&mut scheduler, ms(1)), vec![1]);
    }

    #[test]
    fn test_pop_due_does_not_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::ZERO, 1);
        scheduler.schedule(ms(5), 2);

        assert_eq!(scheduler.pop_due(), Some(1));
        assert_eq!(scheduler.pop_due(), None);
        assert_eq!(scheduler.next_due_in(), Some(ms(5)));
    }

    #[test]
    fn test_clear() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(5), 1);
        scheduler.clear();
        assert!(run(&mut scheduler, ms(10)).is_empty());
    }
}
