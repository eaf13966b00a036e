//! Line-by-line trace playback.
//!
//! Plays a multi-line reasoning trace through the character typist, one
//! line at a time. Blank lines are never typed: they complete the instant
//! they are reached and render as fixed-height spacers. Completed lines
//! stay on screen as static text; lines past the current one are not
//! rendered at all. Playback always restarts from line zero.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::timer::Timers;
use crate::typist::{Typist, TypistEvent};

/// Pause between one line completing and the next line starting.
pub const INTER_LINE_PAUSE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    StartLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    LineCompleted(usize),
    Finished,
}

/// How a single line should render right now.
#[derive(Debug)]
pub enum LineView<'a> {
    /// Completed blank line: a fixed-height spacer.
    Blank,
    /// Completed line, rendered as static text without a cursor.
    Done(&'a str),
    /// The line currently being typed.
    Typing(&'a Typist),
    /// Not reached yet; not rendered.
    Pending,
}

#[derive(Debug)]
pub struct TracePlayback {
    lines: Vec<String>,
    completed: HashSet<usize>,
    current: usize,
    active: bool,
    typist: Option<Typist>,
    timers: Timers<Step>,
    first_line_speed: Duration,
    line_speed: Duration,
    seed: Option<u64>,
}

impl TracePlayback {
    pub fn new(text: &str, first_line_speed: Duration, line_speed: Duration) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            completed: HashSet::new(),
            current: 0,
            active: false,
            typist: None,
            timers: Timers::new(),
            first_line_speed,
            line_speed,
            seed: None,
        }
    }

    /// Deterministic typist jitter for tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starts playback from line zero. Any prior progress is discarded.
    pub fn activate(&mut self, now: Instant) -> Vec<TraceEvent> {
        self.reset();
        self.active = true;
        let mut events = Vec::new();
        self.enter_line(now, &mut events);
        events
    }

    /// Stops playback and clears all completed-line state. Pending steps
    /// are cancelled so nothing from this session can land later.
    pub fn deactivate(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.timers.clear();
        self.completed.clear();
        self.current = 0;
        self.typist = None;
        self.active = false;
    }

    /// Advances playback to `now`, returning completions in line order.
    pub fn tick(&mut self, now: Instant) -> Vec<TraceEvent> {
        if !self.active {
            return Vec::new();
        }
        let mut events = Vec::new();
        for Step::StartLine in self.timers.fire_due(now) {
            self.enter_line(now, &mut events);
        }
        if let Some(typist) = self.typist.as_mut() {
            if typist.tick(now) == Some(TypistEvent::Completed) {
                self.typist = None;
                self.complete_current(now, &mut events);
            }
        }
        events
    }

    /// Begins the current line: blank lines complete immediately,
    /// non-blank lines get a typist.
    fn enter_line(&mut self, now: Instant, events: &mut Vec<TraceEvent>) {
        let Some(line) = self.lines.get(self.current) else {
            return;
        };
        if line.trim().is_empty() {
            self.complete_current(now, events);
        } else {
            let mut typist = self.make_typist(line.clone(), self.current);
            typist.activate(now);
            self.typist = Some(typist);
        }
    }

    fn complete_current(&mut self, now: Instant, events: &mut Vec<TraceEvent>) {
        self.completed.insert(self.current);
        events.push(TraceEvent::LineCompleted(self.current));
        self.current += 1;
        if self.current < self.lines.len() {
            self.timers.after(now, INTER_LINE_PAUSE, Step::StartLine);
        } else {
            events.push(TraceEvent::Finished);
        }
    }

    fn make_typist(&self, line: String, index: usize) -> Typist {
        let speed = if index == 0 {
            self.first_line_speed
        } else {
            self.line_speed
        };
        let typist = match self.seed {
            Some(seed) => Typist::seeded(line, speed, seed.wrapping_add(index as u64)),
            None => Typist::new(line, speed),
        };
        typist.hide_cursor_on_complete(true)
    }

    /// Render state for every line, in order.
    pub fn view(&self) -> Vec<LineView<'_>> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if self.completed.contains(&i) {
                    if line.trim().is_empty() {
                        LineView::Blank
                    } else {
                        LineView::Done(line.as_str())
                    }
                } else if i == self.current {
                    match self.typist.as_ref() {
                        Some(typist) => LineView::Typing(typist),
                        None => LineView::Pending,
                    }
                } else {
                    LineView::Pending
                }
            })
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        self.completed.len() == self.lines.len()
    }

    /// Index of the first line not yet completed.
    pub fn current_line(&self) -> usize {
        self.current
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn next_due(&self) -> Option<Instant> {
        let typist_due = self.typist.as_ref().and_then(Typist::next_due);
        match (self.timers.next_due(), typist_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(trace: &mut TracePlayback, start: Instant, limit: Duration) -> Vec<TraceEvent> {
        let mut events = Vec::new();
        let mut now = start;
        while now - start < limit {
            now += Duration::from_millis(10);
            // Completed lines never reappear as current.
            for i in 0..trace.current_line() {
                assert!(
                    trace.completed.contains(&i),
                    "line {i} skipped without completing"
                );
            }
            events.extend(trace.tick(now));
            if trace.is_finished() {
                break;
            }
        }
        events
    }

    #[test]
    fn test_lines_complete_in_order_with_blank_spacer() {
        let start = Instant::now();
        let mut trace = TracePlayback::new(
            "first line\n\nthird line",
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
        .with_seed(4);

        let mut events = trace.activate(start);
        events.extend(drive(&mut trace, start, Duration::from_secs(10)));

        assert_eq!(
            events,
            vec![
                TraceEvent::LineCompleted(0),
                TraceEvent::LineCompleted(1),
                TraceEvent::LineCompleted(2),
                TraceEvent::Finished,
            ]
        );
        assert!(trace.is_finished());

        // The blank line renders as a spacer, the others as static text.
        let view = trace.view();
        assert!(matches!(view[0], LineView::Done("first line")));
        assert!(matches!(view[1], LineView::Blank));
        assert!(matches!(view[2], LineView::Done("third line")));
    }

    #[test]
    fn test_blank_line_completes_without_typing() {
        let start = Instant::now();
        let mut trace = TracePlayback::new(
            "\nafter",
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
        .with_seed(8);

        // The leading blank completes at activation, before any typing.
        let events = trace.activate(start);
        assert_eq!(events, vec![TraceEvent::LineCompleted(0)]);
        assert!(matches!(trace.view()[0], LineView::Blank));
    }

    #[test]
    fn test_lines_after_current_are_not_rendered() {
        let start = Instant::now();
        let mut trace = TracePlayback::new(
            "one\ntwo",
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
        .with_seed(2);
        trace.activate(start);

        let view = trace.view();
        assert!(matches!(view[0], LineView::Typing(_)));
        assert!(matches!(view[1], LineView::Pending));
    }

    #[test]
    fn test_deactivate_resets_to_line_zero() {
        let start = Instant::now();
        let mut trace = TracePlayback::new(
            "alpha\nbeta",
            Duration::from_millis(5),
            Duration::from_millis(5),
        )
        .with_seed(6);
        trace.activate(start);
        // Make some progress.
        let mut now = start;
        while trace.current_line() == 0 {
            now += Duration::from_millis(10);
            let _ = trace.tick(now);
        }

        trace.deactivate();
        assert_eq!(trace.current_line(), 0);
        assert!(trace.view().iter().all(|v| matches!(v, LineView::Pending)));

        // A stale tick after deactivation changes nothing.
        assert!(trace.tick(now + Duration::from_secs(5)).is_empty());

        // Restarting replays the identical sequence.
        let mut events = trace.activate(now);
        events.extend(drive(&mut trace, now, Duration::from_secs(10)));
        assert_eq!(
            events,
            vec![
                TraceEvent::LineCompleted(0),
                TraceEvent::LineCompleted(1),
                TraceEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_inter_line_pause_delays_next_line() {
        let start = Instant::now();
        let mut trace = TracePlayback::new(
            "a\nb",
            Duration::from_millis(10),
            Duration::from_millis(10),
        )
        .with_seed(3);
        trace.activate(start);

        // Complete the first line.
        let mut now = start;
        while trace.current_line() == 0 {
            now += Duration::from_millis(10);
            let _ = trace.tick(now);
        }

        // During the pause the next line has no typist yet.
        let _ = trace.tick(now + Duration::from_millis(100));
        assert!(matches!(trace.view()[1], LineView::Pending));

        // After the pause it starts typing.
        let _ = trace.tick(now + INTER_LINE_PAUSE + Duration::from_millis(10));
        assert!(matches!(trace.view()[1], LineView::Typing(_)));
    }
}
