//! Slide sequencer for the screenshot gallery.
//!
//! Manages navigation across N ordered panels, each with an asset the
//! host loads asynchronously. Guarantees at most one in-flight transition
//! (flag-based exclusion; everything runs on the UI thread), preloads the
//! neighbors of the active panel, auto-advances on a fixed period, and
//! falls back to showing a panel without its art when the asset load
//! times out instead of freezing navigation on that slide.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::timer::{TimerToken, Timers};

pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(8);
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    TransitionEnd,
    AutoAdvance,
    LoadTimeout(usize),
}

/// Requests the sequencer makes of its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCommand {
    /// Begin loading the asset for this panel.
    Load { index: usize },
}

#[derive(Debug)]
pub struct Slideshow {
    count: usize,
    active: usize,
    direction: SlideDirection,
    loaded: HashSet<usize>,
    /// Assets that failed to load or timed out; their panels show
    /// without art.
    unavailable: HashSet<usize>,
    transitioning: bool,
    /// Transition target waiting on its asset, with the timeout timer.
    pending: Option<(usize, TimerToken)>,
    timers: Timers<Step>,
}

impl Slideshow {
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "slideshow requires at least one panel");
        Self {
            count,
            active: 0,
            direction: SlideDirection::Forward,
            loaded: HashSet::new(),
            unavailable: HashSet::new(),
            transitioning: false,
            pending: None,
            timers: Timers::new(),
        }
    }

    /// Arms the auto-advance timer and requests the initial loads: the
    /// active panel plus both neighbors.
    pub fn mount(&mut self, now: Instant) -> Vec<SlideCommand> {
        self.timers.after(now, AUTO_ADVANCE_INTERVAL, Step::AutoAdvance);
        let mut commands = Vec::new();
        self.request_load(self.active, &mut commands);
        for neighbor in self.neighbors(self.active) {
            self.request_load(neighbor, &mut commands);
        }
        commands
    }

    /// Direct navigation. No-op while a transition is in flight or when
    /// the target is already active; direction follows numeric order.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Vec<SlideCommand> {
        if index >= self.count || self.transitioning || index == self.active {
            return Vec::new();
        }
        let direction = if index > self.active {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.change(index, direction, now)
    }

    /// Advance one panel. Wrapping from the last panel to the first is
    /// still a forward move.
    pub fn next(&mut self, now: Instant) -> Vec<SlideCommand> {
        let target = (self.active + 1) % self.count;
        self.change_guarded(target, SlideDirection::Forward, now)
    }

    /// Step back one panel; wrapping from the first to the last is a
    /// backward move.
    pub fn previous(&mut self, now: Instant) -> Vec<SlideCommand> {
        let target = (self.active + self.count - 1) % self.count;
        self.change_guarded(target, SlideDirection::Backward, now)
    }

    fn change_guarded(
        &mut self,
        target: usize,
        direction: SlideDirection,
        now: Instant,
    ) -> Vec<SlideCommand> {
        if self.transitioning || target == self.active {
            return Vec::new();
        }
        self.change(target, direction, now)
    }

    fn change(
        &mut self,
        target: usize,
        direction: SlideDirection,
        now: Instant,
    ) -> Vec<SlideCommand> {
        self.direction = direction;
        self.transitioning = true;
        if self.loaded.contains(&target) || self.unavailable.contains(&target) {
            self.commit(target, now)
        } else {
            let token = self.timers.after(now, LOAD_TIMEOUT, Step::LoadTimeout(target));
            self.pending = Some((target, token));
            vec![SlideCommand::Load { index: target }]
        }
    }

    /// Makes `target` active and starts preloading its neighbors.
    fn commit(&mut self, target: usize, now: Instant) -> Vec<SlideCommand> {
        self.active = target;
        self.timers.after(now, TRANSITION_DURATION, Step::TransitionEnd);
        let mut commands = Vec::new();
        for neighbor in self.neighbors(target) {
            self.request_load(neighbor, &mut commands);
        }
        commands
    }

    /// The host finished loading an asset.
    pub fn asset_loaded(&mut self, index: usize, now: Instant) -> Vec<SlideCommand> {
        self.loaded.insert(index);
        self.unavailable.remove(&index);
        if let Some((target, token)) = self.pending
            && target == index
        {
            self.pending = None;
            self.timers.cancel(token);
            return self.commit(target, now);
        }
        Vec::new()
    }

    /// The host failed to load an asset. The panel is shown without art
    /// if a transition was waiting on it.
    pub fn asset_unavailable(&mut self, index: usize, now: Instant) -> Vec<SlideCommand> {
        self.unavailable.insert(index);
        if let Some((target, token)) = self.pending
            && target == index
        {
            self.pending = None;
            self.timers.cancel(token);
            tracing::warn!(index, "slide asset unavailable; showing panel without art");
            return self.commit(target, now);
        }
        Vec::new()
    }

    /// Advances timers: transition end, auto-advance, load timeouts.
    pub fn tick(&mut self, now: Instant) -> Vec<SlideCommand> {
        let mut commands = Vec::new();
        for step in self.timers.fire_due(now) {
            match step {
                Step::TransitionEnd => {
                    self.transitioning = false;
                }
                Step::AutoAdvance => {
                    // Re-arm first: a tick during a transition is
                    // skipped, never queued.
                    self.timers.after(now, AUTO_ADVANCE_INTERVAL, Step::AutoAdvance);
                    if !self.transitioning {
                        commands.extend(self.next(now));
                    }
                }
                Step::LoadTimeout(index) => {
                    if let Some((target, _)) = self.pending
                        && target == index
                    {
                        self.pending = None;
                        tracing::warn!(index, "slide asset load timed out; showing panel without art");
                        self.unavailable.insert(index);
                        commands.extend(self.commit(index, now));
                    }
                }
            }
        }
        commands
    }

    fn neighbors(&self, index: usize) -> [usize; 2] {
        [
            (index + 1) % self.count,
            (index + self.count - 1) % self.count,
        ]
    }

    fn request_load(&self, index: usize, commands: &mut Vec<SlideCommand>) {
        let already_pending = self.pending.is_some_and(|(target, _)| target == index);
        if !self.loaded.contains(&index)
            && !self.unavailable.contains(&index)
            && !already_pending
            && !commands.contains(&SlideCommand::Load { index })
        {
            commands.push(SlideCommand::Load { index });
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    pub fn is_unavailable(&self, index: usize) -> bool {
        self.unavailable.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mounted slideshow with every asset already loaded.
    fn loaded_show(count: usize, now: Instant) -> Slideshow {
        let mut show = Slideshow::new(count);
        let _ = show.mount(now);
        for index in 0..count {
            let _ = show.asset_loaded(index, now);
        }
        show
    }

    fn settle(show: &mut Slideshow, now: Instant) -> Instant {
        let later = now + TRANSITION_DURATION + Duration::from_millis(10);
        let _ = show.tick(later);
        later
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut now = Instant::now();
        let mut show = loaded_show(3, now);

        for _ in 0..3 {
            let _ = show.next(now);
            now = settle(&mut show, now);
        }
        assert_eq!(show.active_index(), 0);
        assert!(!show.is_transitioning());
    }

    #[test]
    fn test_previous_wraps_backward() {
        let now = Instant::now();
        let mut show = loaded_show(3, now);

        let _ = show.previous(now);
        assert_eq!(show.active_index(), 2);
        assert_eq!(show.direction(), SlideDirection::Backward);
    }

    #[test]
    fn test_wraparound_next_is_forward() {
        let mut now = Instant::now();
        let mut show = loaded_show(3, now);
        let _ = show.go_to(2, now);
        now = settle(&mut show, now);

        let _ = show.next(now);
        assert_eq!(show.active_index(), 0);
        assert_eq!(show.direction(), SlideDirection::Forward);
    }

    #[test]
    fn test_go_to_is_noop_during_transition() {
        let now = Instant::now();
        let mut show = loaded_show(3, now);

        let _ = show.next(now);
        assert!(show.is_transitioning());
        assert_eq!(show.active_index(), 1);

        let commands = show.go_to(2, now);
        assert!(commands.is_empty());
        assert_eq!(show.active_index(), 1);
        assert!(show.is_transitioning());
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let now = Instant::now();
        let mut show = loaded_show(3, now);
        assert!(show.go_to(0, now).is_empty());
        assert!(!show.is_transitioning());
    }

    #[test]
    fn test_mount_requests_active_and_neighbors() {
        let now = Instant::now();
        let mut show = Slideshow::new(5);
        let commands = show.mount(now);
        assert_eq!(
            commands,
            vec![
                SlideCommand::Load { index: 0 },
                SlideCommand::Load { index: 1 },
                SlideCommand::Load { index: 4 },
            ]
        );
    }

    #[test]
    fn test_commit_preloads_new_neighbors() {
        let now = Instant::now();
        let mut show = Slideshow::new(5);
        for command in show.mount(now) {
            let SlideCommand::Load { index } = command;
            let _ = show.asset_loaded(index, now);
        }

        let commands = show.next(now);
        assert_eq!(show.active_index(), 1);
        assert_eq!(commands, vec![SlideCommand::Load { index: 2 }]);
    }

    #[test]
    fn test_transition_waits_for_asset_load() {
        let now = Instant::now();
        let mut show = Slideshow::new(3);
        let _ = show.mount(now);
        let _ = show.asset_loaded(0, now);

        let commands = show.next(now);
        assert_eq!(commands, vec![SlideCommand::Load { index: 1 }]);
        // Still on the old panel until the asset resolves.
        assert_eq!(show.active_index(), 0);
        assert!(show.is_transitioning());

        let _ = show.asset_loaded(1, now + Duration::from_millis(50));
        assert_eq!(show.active_index(), 1);
        assert!(show.is_loaded(1));
    }

    #[test]
    fn test_load_timeout_falls_back_to_artless_panel() {
        let now = Instant::now();
        let mut show = Slideshow::new(2);
        let _ = show.mount(now);
        let _ = show.asset_loaded(0, now);

        let _ = show.next(now);
        assert_eq!(show.active_index(), 0);

        let _ = show.tick(now + LOAD_TIMEOUT + Duration::from_millis(10));
        assert_eq!(show.active_index(), 1);
        assert!(show.is_unavailable(1));
        // Other navigation still works after the transition settles.
        let later = now + LOAD_TIMEOUT + TRANSITION_DURATION + Duration::from_millis(50);
        let _ = show.tick(later);
        let _ = show.previous(later);
        assert_eq!(show.active_index(), 0);
    }

    #[test]
    fn test_auto_advance_fires_when_idle() {
        let now = Instant::now();
        let mut show = loaded_show(3, now);

        let _ = show.tick(now + AUTO_ADVANCE_INTERVAL + Duration::from_millis(10));
        assert_eq!(show.active_index(), 1);
    }

    #[test]
    fn test_auto_advance_tick_is_skipped_during_transition() {
        let now = Instant::now();
        let mut show = Slideshow::new(3);
        let _ = show.mount(now);
        let _ = show.asset_loaded(0, now);

        // Start a transition that will still be waiting on its asset
        // when the auto-advance tick fires (timeout is longer than the
        // remaining wait here).
        let just_before = now + AUTO_ADVANCE_INTERVAL - Duration::from_millis(100);
        let _ = show.tick(just_before);
        let _ = show.next(just_before);
        assert!(show.is_transitioning());

        let at_tick = now + AUTO_ADVANCE_INTERVAL + Duration::from_millis(10);
        let commands = show.tick(at_tick);
        // Skipped: no navigation happened and none was queued.
        assert!(commands.is_empty());
        assert_eq!(show.active_index(), 0);

        // The timer re-armed for one full interval after the skipped tick.
        let resolved = at_tick + Duration::from_millis(50);
        let _ = show.asset_loaded(1, resolved);
        assert_eq!(show.active_index(), 1);
        let settled = resolved + TRANSITION_DURATION + Duration::from_millis(10);
        let _ = show.tick(settled);
        assert_eq!(show.active_index(), 1);
        let _ = show.asset_loaded(2, settled);
        let _ = show.tick(at_tick + AUTO_ADVANCE_INTERVAL + Duration::from_millis(10));
        assert_eq!(show.active_index(), 2);
    }
}
