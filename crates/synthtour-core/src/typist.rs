//! Character typist: reveals a string one grapheme at a time.
//!
//! The reveal cadence is jittered around a base speed for a natural feel,
//! and a cursor-blink flag toggles on its own fixed interval, independent
//! of the typing timer. Deactivating clears the revealed text and cancels
//! every pending step, so no stale reveal can land on a later session.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unicode_segmentation::UnicodeSegmentation;

use crate::timer::Timers;

/// Classic terminal cursor blink rate.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Delay between activation and the first reveal step.
pub const START_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Reveal,
    Blink,
}

/// Emitted by [`Typist::tick`] at most once per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypistEvent {
    Completed,
}

/// State machine animating a string into view.
#[derive(Debug)]
pub struct Typist {
    source: String,
    /// Byte offset after each grapheme; `boundaries.len()` is the
    /// grapheme count.
    boundaries: Vec<usize>,
    revealed: usize,
    active: bool,
    complete: bool,
    blink_on: bool,
    hide_cursor_on_complete: bool,
    base_speed: Duration,
    timers: Timers<Step>,
    rng: StdRng,
}

impl Typist {
    pub fn new(source: impl Into<String>, base_speed: Duration) -> Self {
        Self::with_rng(source, base_speed, StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn seeded(source: impl Into<String>, base_speed: Duration, seed: u64) -> Self {
        Self::with_rng(source, base_speed, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: impl Into<String>, base_speed: Duration, rng: StdRng) -> Self {
        let source = source.into();
        let boundaries = source
            .grapheme_indices(true)
            .map(|(i, g)| i + g.len())
            .collect();
        Self {
            source,
            boundaries,
            revealed: 0,
            active: false,
            complete: false,
            blink_on: true,
            hide_cursor_on_complete: false,
            base_speed,
            timers: Timers::new(),
            rng,
        }
    }

    /// Hide the cursor once the full string is revealed (used for trace
    /// lines, where only the line being typed carries a cursor).
    pub fn hide_cursor_on_complete(mut self, hide: bool) -> Self {
        self.hide_cursor_on_complete = hide;
        self
    }

    /// Starts (or restarts) the reveal from the first grapheme.
    pub fn activate(&mut self, now: Instant) {
        self.timers.clear();
        self.revealed = 0;
        self.complete = false;
        self.active = true;
        self.blink_on = true;
        self.timers.after(now, START_DELAY, Step::Reveal);
        self.timers.after(now, CURSOR_BLINK_INTERVAL, Step::Blink);
    }

    /// Clears the revealed text and cancels all pending steps.
    pub fn deactivate(&mut self) {
        self.timers.clear();
        self.revealed = 0;
        self.complete = false;
        self.active = false;
        self.blink_on = false;
    }

    /// Advances the animation to `now`. Returns the completion event
    /// exactly once, after the last grapheme is revealed.
    pub fn tick(&mut self, now: Instant) -> Option<TypistEvent> {
        if !self.active {
            return None;
        }
        let mut completed_now = false;
        for step in self.timers.fire_due(now) {
            match step {
                Step::Reveal => {
                    if self.revealed < self.boundaries.len() {
                        self.revealed += 1;
                    }
                    if self.revealed < self.boundaries.len() {
                        let delay = self.jitter();
                        self.timers.after(now, delay, Step::Reveal);
                    } else if !self.complete {
                        self.complete = true;
                        completed_now = true;
                        if self.hide_cursor_on_complete {
                            self.blink_on = false;
                        }
                    }
                }
                Step::Blink => {
                    if self.complete && self.hide_cursor_on_complete {
                        self.blink_on = false;
                    } else {
                        self.blink_on = !self.blink_on;
                        self.timers.after(now, CURSOR_BLINK_INTERVAL, Step::Blink);
                    }
                }
            }
        }
        completed_now.then_some(TypistEvent::Completed)
    }

    /// Randomized per-step delay in `[base/2, base*3/2]`.
    fn jitter(&mut self) -> Duration {
        let base = self.base_speed.as_millis() as u64;
        let lo = base / 2;
        let hi = base + base / 2;
        Duration::from_millis(self.rng.gen_range(lo..=hi))
    }

    /// The prefix revealed so far.
    pub fn visible_text(&self) -> &str {
        if self.revealed == 0 {
            ""
        } else {
            &self.source[..self.boundaries[self.revealed - 1]]
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Raw blink flag, toggled every [`CURSOR_BLINK_INTERVAL`].
    pub fn blink_on(&self) -> bool {
        self.blink_on
    }

    /// Whether a cursor block should render: solid while typing, blinking
    /// afterwards unless configured to hide on completion.
    pub fn cursor_visible(&self) -> bool {
        if !self.active {
            return false;
        }
        if !self.complete {
            return true;
        }
        !self.hide_cursor_on_complete && self.blink_on
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives the typist forward in small increments until it completes
    /// or `limit` elapses, returning every visible state transition.
    fn run_to_completion(typist: &mut Typist, start: Instant, limit: Duration) -> (Vec<String>, usize) {
        let mut states = vec![String::new()];
        let mut completions = 0;
        let mut now = start;
        let step = Duration::from_millis(5);
        while now - start < limit {
            now += step;
            if typist.tick(now) == Some(TypistEvent::Completed) {
                completions += 1;
            }
            let visible = typist.visible_text().to_string();
            if states.last() != Some(&visible) {
                states.push(visible);
            }
        }
        (states, completions)
    }

    #[test]
    fn test_reveals_full_string_and_completes_once() {
        let start = Instant::now();
        let mut typist = Typist::seeded("hello", Duration::from_millis(15), 7);
        typist.activate(start);

        let (states, completions) = run_to_completion(&mut typist, start, Duration::from_secs(2));

        assert_eq!(states.last().map(String::as_str), Some("hello"));
        assert_eq!(completions, 1);
        assert!(typist.is_complete());

        // No second completion after further ticks.
        assert_eq!(typist.tick(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_two_char_scenario_reveals_in_order() {
        let start = Instant::now();
        let mut typist = Typist::seeded("ab", Duration::from_millis(15), 42);
        typist.activate(start);

        let (states, completions) = run_to_completion(&mut typist, start, Duration::from_secs(1));

        // Exactly two reveal steps: "" before the start delay, then "a",
        // then "ab".
        assert_eq!(states, vec![String::new(), "a".to_string(), "ab".to_string()]);
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_empty_source_completes_without_reveals() {
        let start = Instant::now();
        let mut typist = Typist::seeded("", Duration::from_millis(15), 1);
        typist.activate(start);

        assert_eq!(typist.tick(start + START_DELAY), Some(TypistEvent::Completed));
        assert_eq!(typist.visible_text(), "");
        assert!(typist.is_complete());
    }

    #[test]
    fn test_deactivation_clears_and_blocks_stale_steps() {
        let start = Instant::now();
        let mut typist = Typist::seeded("stale", Duration::from_millis(10), 3);
        typist.activate(start);
        // Reveal a couple of characters.
        let mut now = start;
        for _ in 0..60 {
            now += Duration::from_millis(5);
            let _ = typist.tick(now);
            if !typist.visible_text().is_empty() {
                break;
            }
        }
        assert!(!typist.visible_text().is_empty());

        typist.deactivate();
        assert_eq!(typist.visible_text(), "");

        // A pending reveal scheduled before deactivation must never land.
        assert_eq!(typist.tick(now + Duration::from_secs(5)), None);
        assert_eq!(typist.visible_text(), "");

        // Reactivation restarts from the first grapheme.
        typist.activate(now);
        let (states, completions) =
            run_to_completion(&mut typist, now, Duration::from_secs(2));
        assert_eq!(states.last().map(String::as_str), Some("stale"));
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_grapheme_prefixes_are_valid() {
        let start = Instant::now();
        let mut typist = Typist::seeded("né👍!", Duration::from_millis(5), 9);
        typist.activate(start);
        let (states, _) = run_to_completion(&mut typist, start, Duration::from_secs(2));
        // Every intermediate state is a valid grapheme prefix.
        assert_eq!(states, vec!["", "n", "né", "né👍", "né👍!"]);
    }

    #[test]
    fn test_blink_toggles_on_fixed_interval() {
        let start = Instant::now();
        let mut typist = Typist::seeded("x", Duration::from_millis(15), 5);
        typist.activate(start);
        assert!(typist.blink_on());

        let _ = typist.tick(start + CURSOR_BLINK_INTERVAL);
        assert!(!typist.blink_on());
        let _ = typist.tick(start + CURSOR_BLINK_INTERVAL * 2);
        assert!(typist.blink_on());
    }

    #[test]
    fn test_cursor_hidden_after_completion_when_configured() {
        let start = Instant::now();
        let mut typist =
            Typist::seeded("hi", Duration::from_millis(10), 11).hide_cursor_on_complete(true);
        typist.activate(start);
        let (_, completions) = run_to_completion(&mut typist, start, Duration::from_secs(2));
        assert_eq!(completions, 1);
        assert!(!typist.cursor_visible());
    }
}
