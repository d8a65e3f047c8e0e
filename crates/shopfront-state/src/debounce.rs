//! # Debounce Primitive
//!
//! A cancellable delayed-invocation primitive: a deadline plus a
//! generation counter. Scheduling while a deadline is pending resets the
//! deadline and bumps the generation, implicitly discarding the earlier
//! pending invocation.
//!
//! The debouncer never reads the clock. The driver (the event loop, or a
//! test) supplies `Instant`s and polls with [`Debouncer::fire_due`]; the
//! pending deadline is exposed so the driver can size its poll timeout.

use std::time::{Duration, Instant};

/// Deadline + generation counter.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            deadline: None,
            generation: 0,
        }
    }

    /// Schedules (or reschedules) the deadline at `now + window`.
    ///
    /// Bumps the generation, so anything keyed to an earlier schedule is
    /// stale from this point on. Returns the new generation.
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + self.window);
        self.generation
    }

    /// Drops the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any. Drivers use this to bound their
    /// poll timeout.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires the deadline if it is due at `now`.
    ///
    /// Returns the generation that fired, or `None` when nothing is
    /// pending or the quiet period has not elapsed. Firing clears the
    /// deadline; the generation keeps counting across fires.
    pub fn fire_due(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.generation)
            }
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn test_idle_never_fires() {
        let mut debouncer = Debouncer::new(WINDOW);
        let now = Instant::now();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire_due(now + WINDOW), None);
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        assert!(debouncer.is_pending());

        // Too early: the quiet period has not elapsed yet.
        assert_eq!(debouncer.fire_due(start + Duration::from_millis(199)), None);
        assert!(debouncer.is_pending());

        assert_eq!(debouncer.fire_due(start + WINDOW), Some(1));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_resets_deadline() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(150));

        // The first deadline (start + 200ms) must not fire.
        assert_eq!(debouncer.fire_due(start + Duration::from_millis(200)), None);

        // The rescheduled deadline fires with the bumped generation.
        assert_eq!(
            debouncer.fire_due(start + Duration::from_millis(350)),
            Some(2)
        );
    }

    #[test]
    fn test_fire_clears_pending_until_next_schedule() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        assert!(debouncer.fire_due(start + WINDOW).is_some());
        // Already fired; nothing further without a new schedule.
        assert_eq!(debouncer.fire_due(start + WINDOW * 2), None);

        assert_eq!(debouncer.schedule(start + WINDOW * 2), 2);
        assert_eq!(debouncer.fire_due(start + WINDOW * 3), Some(2));
    }

    #[test]
    fn test_cancel_discards_deadline() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.schedule(start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire_due(start + WINDOW), None);
    }

    #[test]
    fn test_deadline_exposed_for_poll_timeout() {
        let mut debouncer = Debouncer::new(WINDOW);
        let start = Instant::now();

        assert_eq!(debouncer.deadline(), None);
        debouncer.schedule(start);
        assert_eq!(debouncer.deadline(), Some(start + WINDOW));
    }
}
