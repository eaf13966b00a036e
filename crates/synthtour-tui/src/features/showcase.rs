//! Data-showcase panel: plays a SYNTH sample record as live-typed output.
//!
//! The query types through one typist while the reasoning trace plays
//! line by line underneath. Playback starts shortly after the section
//! scrolls into view and restarts when the sample tab changes. Leaving
//! the viewport deactivates everything, so scrolling back replays the
//! panel from the start.

use std::time::{Duration, Instant};

use synthtour_core::config::TypingConfig;
use synthtour_core::content::{SampleRecord, Samples};
use synthtour_core::timer::Timers;
use synthtour_core::trace::TracePlayback;
use synthtour_core::typist::Typist;

/// Delay between the section scrolling into view and typing starting.
pub const VIEW_START_DELAY: Duration = Duration::from_millis(800);

/// Delay before typing restarts after a tab change.
pub const TAB_RESTART_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTab {
    Math,
    Medical,
}

impl SampleTab {
    pub fn other(self) -> Self {
        match self {
            SampleTab::Math => SampleTab::Medical,
            SampleTab::Medical => SampleTab::Math,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SampleTab::Math => "Math",
            SampleTab::Medical => "Medical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
}

#[derive(Debug)]
pub struct ShowcaseState {
    pub tab: SampleTab,
    pub query: Typist,
    pub trace: TracePlayback,
    samples: Samples,
    typing: TypingConfig,
    visible: bool,
    started: bool,
    timers: Timers<Step>,
}

impl ShowcaseState {
    pub fn new(samples: Samples, typing: TypingConfig) -> Self {
        let (query, trace) = build_playback(&samples.math, &typing);
        Self {
            tab: SampleTab::Math,
            query,
            trace,
            samples,
            typing,
            visible: false,
            started: false,
            timers: Timers::new(),
        }
    }

    pub fn sample(&self) -> &SampleRecord {
        match self.tab {
            SampleTab::Math => &self.samples.math,
            SampleTab::Medical => &self.samples.medical,
        }
    }

    /// The section scrolled into view; start typing after a short delay.
    pub fn enter_view(&mut self, now: Instant) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.timers.after(now, VIEW_START_DELAY, Step::Start);
    }

    /// The section left the viewport: stop and reset so the next entry
    /// replays from the start.
    pub fn leave_view(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.started = false;
        self.timers.clear();
        self.query.deactivate();
        self.trace.deactivate();
    }

    /// Switches sample, resetting playback. Restarts automatically when
    /// the section is on screen.
    pub fn set_tab(&mut self, tab: SampleTab, now: Instant) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.started = false;
        self.timers.clear();
        let (query, trace) = build_playback(self.sample(), &self.typing);
        self.query = query;
        self.trace = trace;
        if self.visible {
            self.timers.after(now, TAB_RESTART_DELAY, Step::Start);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for Step::Start in self.timers.fire_due(now) {
            self.started = true;
            self.query.activate(now);
            let _ = self.trace.activate(now);
        }
        let _ = self.query.tick(now);
        let _ = self.trace.tick(now);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Whether the panel still has pending animation work.
    pub fn is_animating(&self) -> bool {
        if !self.visible {
            return false;
        }
        !self.started || !self.query.is_complete() || !self.trace.is_finished()
    }
}

fn build_playback(sample: &SampleRecord, typing: &TypingConfig) -> (Typist, TracePlayback) {
    let query = Typist::new(sample.query, typing.query_speed());
    let trace = TracePlayback::new(
        sample.reasoning,
        typing.first_line_speed(),
        typing.line_speed(),
    );
    (query, trace)
}

/// Semantic tone of a reasoning-trace line, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceTone {
    Think,
    Heading,
    Step,
    Conclusion,
    Bullet,
    Tag,
    Flow,
    Plain,
}

/// Classifies a trace line by its shape.
pub fn trace_tone(line: &str) -> TraceTone {
    if line.contains("<think>") || line.contains("</think>") {
        TraceTone::Think
    } else if line.starts_with("###") {
        TraceTone::Heading
    } else if line.starts_with("Step") {
        TraceTone::Step
    } else if line.starts_with('∴') || line.contains("Conclusion") {
        TraceTone::Conclusion
    } else if line.starts_with('-') {
        TraceTone::Bullet
    } else if line.contains('[') && line.contains(']') {
        TraceTone::Tag
    } else if line.contains('→')
        || line.contains('●')
        || line.contains('◐')
        || line.contains('↺')
        || line.contains('!')
    {
        TraceTone::Flow
    } else {
        TraceTone::Plain
    }
}
