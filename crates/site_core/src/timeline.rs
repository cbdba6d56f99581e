//! Monotonic virtual clock with cancellable one-shot timers.
//!
//! Nothing here sleeps. The owner advances the clock (from a frame callback, a
//! tokio interval, or a test) and receives the payloads whose deadline passed.

use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

use shared::domain::TimerId;

#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), T>,
    deadlines: HashMap<TimerId, Duration>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 1,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), payload);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Returns `false` when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.pending.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Moves the clock forward and drains every timer due at or before `now`,
    /// ordered by deadline then scheduling order. Moving backwards is ignored.
    pub fn advance_to(&mut self, now: Duration) -> Vec<T> {
        if now > self.now {
            self.now = now;
        }
        let mut fired = Vec::new();
        while let Some(entry) = self.pending.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            let ((_, id), payload) = entry.remove_entry();
            self.deadlines.remove(&id);
            fired.push(payload);
        }
        fired
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<T> {
        self.advance_to(self.now + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_after(ms(300), "late");
        timeline.schedule_after(ms(100), "early");
        timeline.schedule_after(ms(100), "early-second");

        assert!(timeline.advance_to(ms(99)).is_empty());
        assert_eq!(timeline.advance_to(ms(100)), vec!["early", "early-second"]);
        assert_eq!(timeline.next_deadline(), Some(ms(300)));
        assert_eq!(timeline.advance_by(ms(500)), vec!["late"]);
        assert_eq!(timeline.pending_len(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timeline = Timeline::new();
        let keep = timeline.schedule_after(ms(50), 1);
        let drop = timeline.schedule_after(ms(50), 2);

        assert!(timeline.cancel(drop));
        assert!(!timeline.cancel(drop));
        assert!(timeline.is_pending(keep));
        assert_eq!(timeline.advance_to(ms(1_000)), vec![1]);
        assert!(!timeline.cancel(keep));
    }

    #[test]
    fn clock_does_not_run_backwards() {
        let mut timeline: Timeline<()> = Timeline::new();
        timeline.advance_to(ms(400));
        timeline.advance_to(ms(100));
        assert_eq!(timeline.now(), ms(400));

        timeline.schedule_after(ms(10), ());
        assert_eq!(timeline.next_deadline(), Some(ms(410)));
    }
}
