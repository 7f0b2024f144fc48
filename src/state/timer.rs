//! Cancellable deadlines for simulated loading and debounce delays.
//!
//! A [`Deadline`] is a plain value. It lives inside the state it is allowed
//! to mutate (usually as an `Option<Deadline>`), so replacing or dropping that
//! state cancels the pending work. Nothing fires on its own: owners poll
//! [`Deadline::is_due`] from their `tick(now)`.

use std::time::{Duration, Instant};

/// A point in time at which a pending state change should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    fires_at: Instant,
}

impl Deadline {
    /// Create a deadline `duration` after `now`.
    pub fn after(now: Instant, duration: Duration) -> Self {
        Self {
            fires_at: now + duration,
        }
    }

    /// The instant this deadline fires.
    pub fn fires_at(&self) -> Instant {
        self.fires_at
    }

    /// Check whether the deadline has been reached.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.fires_at
    }

    /// Time left until the deadline fires (zero once due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.fires_at.saturating_duration_since(now)
    }
}

/// Take the deadline out of `slot` if it is due, leaving `None` behind.
///
/// Returns the instant it was scheduled for so chained deadlines can be
/// anchored on the original schedule instead of the (possibly late) tick.
pub fn take_due(slot: &mut Option<Deadline>, now: Instant) -> Option<Instant> {
    match slot {
        Some(deadline) if deadline.is_due(now) => {
            let fired = deadline.fires_at();
            *slot = None;
            Some(fired)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_due() {
        let now = Instant::now();
        let deadline = Deadline::after(now, Duration::from_millis(300));
        assert!(!deadline.is_due(now));
        assert!(!deadline.is_due(now + Duration::from_millis(299)));
        assert!(deadline.is_due(now + Duration::from_millis(300)));
    }

    #[test]
    fn test_remaining_saturates() {
        let now = Instant::now();
        let deadline = Deadline::after(now, Duration::from_secs(1));
        assert_eq!(deadline.remaining(now), Duration::from_secs(1));
        assert_eq!(deadline.remaining(now + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_take_due_clears_slot() {
        let now = Instant::now();
        let mut slot = Some(Deadline::after(now, Duration::from_millis(10)));

        assert_eq!(take_due(&mut slot, now), None);
        assert!(slot.is_some());

        let fired = take_due(&mut slot, now + Duration::from_millis(50));
        assert_eq!(fired, Some(now + Duration::from_millis(10)));
        assert!(slot.is_none());

        // Already consumed
        assert_eq!(take_due(&mut slot, now + Duration::from_secs(1)), None);
    }
}
