//! Tour runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async results (slide art loads) arrive through an inbox channel the
//! runtime drains each loop, so handlers never touch UI state directly.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use synthtour_core::config::Config;
use synthtour_core::consent::ConsentStore;
use synthtour_core::content::Content;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::gallery;
use crate::state::{AppState, TourState};
use crate::{render, terminal, update};

/// Tick cadence while something is animating (~30fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll cadence when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen tour runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and
/// panic.
pub struct TourRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    consent: Box<dyn ConsentStore + Send>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TourRuntime {
    pub fn new(
        config: Config,
        content: Content,
        consent: Box<dyn ConsentStore + Send>,
    ) -> Result<Self> {
        // Set up panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();

        let consent_recorded = match consent.load() {
            Ok(record) => record.is_some(),
            Err(error) => {
                tracing::warn!(%error, "failed to read consent record; showing banner");
                false
            }
        };

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config, content, consent_recorded);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            consent,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // Arm the gallery: auto-advance timer plus the initial art loads.
        let commands = self.state.tour.gallery.slideshow.mount(Instant::now());
        let effects = update::slide_effects(&self.state.tour, &commands);
        self.execute_effects(effects);

        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tour.should_quit {
            let mut events = self.collect_events()?;

            // Prepend Frame with the current terminal size so layout and
            // scroll activation happen before other events.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers a render - this caps the frame rate
                // at the tick cadence.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal, emitting a Tick
    /// when the cadence interval has elapsed.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        // Fast cadence while animating or during recent input, slow
        // otherwise to save CPU.
        let recent_input = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if recent_input || animating(&self.state.tour) {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered input (non-blocking).
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tour.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                let _ = open::that(&url);
            }
            UiEffect::SaveConsent { record } => {
                if let Err(error) = self.consent.save(&record) {
                    tracing::warn!(%error, "failed to persist consent choice");
                }
            }
            UiEffect::LoadArt {
                generation,
                index,
                path,
            } => {
                let fallback = self
                    .state
                    .tour
                    .content
                    .screenshots
                    .get(index)
                    .and_then(|shot| gallery::builtin_art(shot.id));
                let tx = self.inbox_tx.clone();
                tokio::task::spawn_blocking(move || {
                    let result = match std::fs::read_to_string(&path) {
                        Ok(art) => Ok(art),
                        Err(_) => match fallback {
                            Some(art) => Ok(art.to_string()),
                            None => Err(format!("no art at {}", path.display())),
                        },
                    };
                    let _ = tx.send(UiEvent::ArtLoaded {
                        generation,
                        index,
                        result,
                    });
                });
            }
        }
    }
}

fn animating(tour: &TourState) -> bool {
    if tour.showcase.is_animating() || tour.gallery.slideshow.is_transitioning() {
        return true;
    }
    // Loading placeholder spinner on the active slide.
    let active = tour.gallery.slideshow.active_index();
    !tour.gallery.slideshow.is_loaded(active) && !tour.gallery.slideshow.is_unavailable(active)
}

impl Drop for TourRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
