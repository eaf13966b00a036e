//! Tour reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Handlers that advance animations
//! take an explicit `now` so tests can drive them with a synthetic clock.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use synthtour_core::consent::{ConsentChoice, ConsentRecord};
use synthtour_core::slideshow::SlideCommand;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::{AppState, SectionId, TourState};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => advance_animations(&mut app.tour, Instant::now()),
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tour, width, height, Instant::now());
            Vec::new()
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event, Instant::now()),
        UiEvent::ArtLoaded {
            generation,
            index,
            result,
        } => handle_art_loaded(&mut app.tour, generation, index, result, Instant::now()),
    }
}

/// Advances every sequencer to `now`.
pub fn advance_animations(tour: &mut TourState, now: Instant) -> Vec<UiEffect> {
    tour.spinner_frame = tour.spinner_frame.wrapping_add(1);
    tour.showcase.tick(now);
    let commands = tour.gallery.slideshow.tick(now);
    slide_effects(tour, &commands)
}

/// Per-frame housekeeping: layout measurement, scroll clamping, and
/// scroll-triggered activation of the data showcase.
pub fn handle_frame(tour: &mut TourState, width: u16, height: u16, now: Instant) {
    tour.viewport = (width, height);
    let layout = render::section_heights(tour, usize::from(width));
    tour.layout = layout;
    tour.content_height = tour.layout.iter().map(|(_, height)| *height).sum();
    tour.scroll = tour.scroll.min(tour.max_scroll());

    if tour.section_in_view(SectionId::DataShowcase) {
        tour.showcase.enter_view(now);
    } else {
        tour.showcase.leave_view();
    }
}

/// Maps slideshow load requests to runtime effects, tagging them with
/// the gallery generation so stale results can be discarded.
pub fn slide_effects(tour: &TourState, commands: &[SlideCommand]) -> Vec<UiEffect> {
    commands
        .iter()
        .map(|SlideCommand::Load { index }| UiEffect::LoadArt {
            generation: tour.gallery.generation(),
            index: *index,
            path: tour
                .config
                .art_dir()
                .join(tour.content.screenshots[*index].art),
        })
        .collect()
}

fn handle_terminal_event(app: &mut AppState, event: Event, now: Instant) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key, now),
        _ => Vec::new(),
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return vec![UiEffect::Quit];
    }

    // The banner claims its keys first; everything else falls through so
    // the page keeps scrolling underneath.
    if app.banner.is_some() {
        match key.code {
            KeyCode::Char('a') => {
                app.banner = None;
                return vec![UiEffect::SaveConsent {
                    record: ConsentRecord::new(ConsentChoice::Accepted),
                }];
            }
            KeyCode::Char('d') => {
                app.banner = None;
                return vec![UiEffect::SaveConsent {
                    record: ConsentRecord::new(ConsentChoice::Declined),
                }];
            }
            KeyCode::Char('i') => {
                if let Some(banner) = app.banner.as_mut() {
                    banner.show_details = !banner.show_details;
                }
                return Vec::new();
            }
            KeyCode::Esc => {
                // Dismissed without a choice: nothing is persisted and
                // the banner returns next run.
                app.banner = None;
                return Vec::new();
            }
            _ => {}
        }
    }

    let tour = &mut app.tour;
    match key.code {
        KeyCode::Left => {
            let commands = tour.gallery.slideshow.previous(now);
            slide_effects(tour, &commands)
        }
        KeyCode::Right => {
            let commands = tour.gallery.slideshow.next(now);
            slide_effects(tour, &commands)
        }
        KeyCode::Up => {
            tour.scroll = tour.scroll.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down => {
            tour.scroll = (tour.scroll + 1).min(tour.max_scroll());
            Vec::new()
        }
        KeyCode::PageUp => {
            tour.scroll = tour.scroll.saturating_sub(tour.body_height());
            Vec::new()
        }
        KeyCode::PageDown => {
            tour.scroll = (tour.scroll + tour.body_height()).min(tour.max_scroll());
            Vec::new()
        }
        KeyCode::Home => {
            tour.scroll = 0;
            Vec::new()
        }
        KeyCode::End => {
            tour.scroll = tour.max_scroll();
            Vec::new()
        }
        KeyCode::Tab => {
            let tab = tour.showcase.tab.other();
            tour.showcase.set_tab(tab, now);
            Vec::new()
        }
        KeyCode::Char('o') => vec![UiEffect::OpenBrowser {
            url: tour.content.links.repo.to_string(),
        }],
        _ => Vec::new(),
    }
}

fn handle_art_loaded(
    tour: &mut TourState,
    generation: u64,
    index: usize,
    result: Result<String, String>,
    now: Instant,
) -> Vec<UiEffect> {
    if generation != tour.gallery.generation() {
        tracing::debug!(index, "discarding art load from superseded gallery");
        return Vec::new();
    }
    match result {
        Ok(art) => {
            let _ = tour.gallery.store_art(generation, index, art);
            let commands = tour.gallery.slideshow.asset_loaded(index, now);
            slide_effects(tour, &commands)
        }
        Err(error) => {
            tracing::warn!(index, %error, "failed to load slide art");
            let commands = tour.gallery.slideshow.asset_unavailable(index, now);
            slide_effects(tour, &commands)
        }
    }
}
