//! Deadline timers for the animation sequencers.
//!
//! Every suspend point in the sequencers (per-grapheme reveal delay,
//! cursor blink, inter-line pause, slide transition, asset-load timeout,
//! auto-advance) is expressed as a `Timers` entry. The current time is
//! always passed in by the caller, never read here, so tests drive the
//! sequencers with a synthetic clock and never sleep.

use std::time::{Duration, Instant};

/// Handle for a scheduled entry, usable to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug)]
struct Entry<E> {
    token: TimerToken,
    due: Instant,
    entry: E,
}

/// A set of pending one-shot timers owned by a single sequencer.
///
/// Entries fire in deadline order; ties fire in schedule order.
#[derive(Debug)]
pub struct Timers<E> {
    next_token: u64,
    pending: Vec<Entry<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            next_token: 0,
            pending: Vec::new(),
        }
    }

    /// Schedules `entry` to fire once `delay` has elapsed from `now`.
    pub fn after(&mut self, now: Instant, delay: Duration, entry: E) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending.push(Entry {
            token,
            due: now + delay,
            entry,
        });
        token
    }

    /// Cancels a pending entry. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.token != token);
        self.pending.len() != before
    }

    /// Drops every pending entry.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns all entries due at `now`, in firing order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<E> {
        if self.pending.iter().all(|e| e.due > now) {
            return Vec::new();
        }
        let mut due = Vec::new();
        let mut rest = Vec::new();
        for e in self.pending.drain(..) {
            if e.due <= now {
                due.push(e);
            } else {
                rest.push(e);
            }
        }
        self.pending = rest;
        // Schedule order (token) breaks deadline ties.
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.token.0.cmp(&b.token.0)));
        due.into_iter().map(|e| e.entry).collect()
    }

    /// Earliest pending deadline, if any. Used by the runtime to pick a
    /// poll cadence.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|e| e.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let now = Instant::now();
        let mut timers = Timers::new();
        timers.after(now, Duration::from_millis(30), "b");
        timers.after(now, Duration::from_millis(10), "a");

        assert!(timers.fire_due(now).is_empty());
        let fired = timers.fire_due(now + Duration::from_millis(50));
        assert_eq!(fired, vec!["a", "b"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let now = Instant::now();
        let mut timers = Timers::new();
        timers.after(now, Duration::from_millis(10), 1);
        timers.after(now, Duration::from_millis(10), 2);

        assert_eq!(timers.fire_due(now + Duration::from_millis(10)), vec![1, 2]);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let now = Instant::now();
        let mut timers = Timers::new();
        let token = timers.after(now, Duration::from_millis(10), "x");
        let kept = timers.after(now, Duration::from_millis(10), "y");

        assert!(timers.cancel(token));
        assert!(!timers.cancel(token));
        let _ = kept;
        assert_eq!(timers.fire_due(now + Duration::from_millis(20)), vec!["y"]);
    }

    #[test]
    fn test_next_due_tracks_earliest() {
        let now = Instant::now();
        let mut timers = Timers::new();
        assert!(timers.next_due().is_none());
        timers.after(now, Duration::from_millis(40), ());
        timers.after(now, Duration::from_millis(20), ());
        assert_eq!(timers.next_due(), Some(now + Duration::from_millis(20)));
    }

    #[test]
    fn test_clear_drops_everything() {
        let now = Instant::now();
        let mut timers = Timers::new();
        timers.after(now, Duration::from_millis(5), ());
        timers.clear();
        assert!(timers.fire_due(now + Duration::from_secs(1)).is_empty());
    }
}
