//! Rendering.
//!
//! The page is built as a flat list of styled lines, section by section;
//! the visible slice is drawn into the body area, with a one-row status
//! line at the bottom and the consent banner overlaid when present.
//! `section_heights` measures the same builders, so layout and rendering
//! can never disagree.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use synthtour_core::trace::LineView;
use synthtour_core::typist::Typist;
use unicode_width::UnicodeWidthStr;

use crate::common::text;
use crate::features::banner::BannerState;
use crate::features::showcase::{SampleTab, TraceTone, trace_tone};
use crate::state::{AppState, SectionId, TourState};

const CURSOR: &str = "▌";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn title_style() -> Style {
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::new().fg(Color::DarkGray)
}

fn body_style() -> Style {
    Style::new().fg(Color::Gray)
}

fn accent() -> Style {
    Style::new().fg(Color::LightBlue)
}

fn key_style() -> Style {
    Style::new().fg(Color::Blue)
}

fn string_style() -> Style {
    Style::new().fg(Color::Green)
}

fn trace_style(tone: TraceTone) -> Style {
    match tone {
        TraceTone::Think => Style::new().fg(Color::Magenta),
        TraceTone::Heading => Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        TraceTone::Step => Style::new().fg(Color::Yellow),
        TraceTone::Conclusion => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        TraceTone::Bullet => Style::new().fg(Color::DarkGray),
        TraceTone::Tag => Style::new().fg(Color::Cyan),
        TraceTone::Flow => Style::new().fg(Color::Gray),
        TraceTone::Plain => Style::new().fg(Color::DarkGray),
    }
}

/// Draws the full frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    if area.height < 2 || area.width < 10 {
        return;
    }
    let body = Rect::new(area.x, area.y, area.width, area.height - 1);
    let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let lines = page_lines(&app.tour, usize::from(area.width));
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(app.tour.scroll)
        .take(usize::from(body.height))
        .collect();
    frame.render_widget(Paragraph::new(visible), body);

    render_status_line(&app.tour, frame, status);

    if let Some(banner) = &app.banner {
        render_banner(banner, frame, area);
    }
}

/// Heights of every section at the given width, in scroll order.
pub fn section_heights(tour: &TourState, width: usize) -> Vec<(SectionId, usize)> {
    SectionId::ALL
        .iter()
        .map(|id| (*id, build_section(tour, *id, width).len()))
        .collect()
}

fn page_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    SectionId::ALL
        .iter()
        .flat_map(|id| build_section(tour, *id, width))
        .collect()
}

fn build_section(tour: &TourState, id: SectionId, width: usize) -> Vec<Line<'static>> {
    match id {
        SectionId::Hero => hero_lines(tour, width),
        SectionId::Providers => providers_lines(tour, width),
        SectionId::Features => features_lines(tour, width),
        SectionId::DataShowcase => showcase_lines(tour, width),
        SectionId::Model => model_lines(tour, width),
        SectionId::Industries => industries_lines(tour, width),
        SectionId::Screenshots => screenshots_lines(tour, width),
        SectionId::Downloads => downloads_lines(tour, width),
        SectionId::Contributors => contributors_lines(tour),
        SectionId::Footer => footer_lines(tour),
    }
}

fn inner_width(width: usize) -> usize {
    width.saturating_sub(4).max(20)
}

fn blank() -> Line<'static> {
    Line::default()
}

fn styled(indent: &str, text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(vec![Span::raw(indent.to_string()), Span::styled(text.into(), style)])
}

fn heading(text: &str) -> Line<'static> {
    styled("  ", text, title_style())
}

fn wrapped(indent: &'static str, text_body: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    text::wrap(text_body, width.saturating_sub(indent.len()).max(10))
        .into_iter()
        .map(|line| styled(indent, line, style))
        .collect()
}

// ============================================================================
// Sections
// ============================================================================

fn hero_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let hero = &tour.content.hero;
    let mut lines = vec![
        blank(),
        styled("  ", format!("⚡ {}", hero.badge), accent()),
        blank(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(hero.title.to_string(), title_style()),
            Span::styled(hero.accent.to_string(), dim().add_modifier(Modifier::BOLD)),
        ]),
        blank(),
    ];
    lines.extend(wrapped("  ", hero.tagline, inner_width(width), body_style()));
    lines.push(blank());

    let mut stats = vec![Span::raw("  ")];
    for stat in hero.stats {
        stats.push(Span::styled(stat.value.to_string(), title_style()));
        stats.push(Span::styled(format!(" {}   ", stat.label), dim()));
    }
    lines.push(Line::from(stats));
    lines.push(blank());
    lines
}

fn providers_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Works with the models you already use"), blank()];

    // Pack provider chips into as few rows as fit.
    let max = inner_width(width);
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    let mut used = 0;
    for provider in tour.content.providers {
        let chip_width = provider.monogram.width() + provider.name.width() + 5;
        if used + chip_width > max && spans.len() > 1 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw("  "));
            used = 0;
        }
        spans.push(Span::styled(format!("[{}]", provider.monogram), accent()));
        spans.push(Span::styled(format!(" {}  ", provider.name), body_style()));
        used += chip_width;
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }
    lines.push(blank());
    lines
}

fn features_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Everything you need for synthetic data"),
        blank(),
    ];
    for feature in tour.content.features {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ".to_string(), accent()),
            Span::styled(feature.title.to_string(), title_style()),
        ]));
        lines.extend(wrapped("    ", feature.description, inner_width(width), body_style()));
        lines.push(blank());
    }
    lines
}

fn showcase_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let showcase = &tour.showcase;
    let mut lines = vec![
        heading("Structured reasoning traces for AI training"),
        styled("  ", "SYNTH Format", Style::new().fg(Color::Green)),
        blank(),
    ];
    for point in tour.content.format_points {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ".to_string(), Style::new().fg(Color::Green)),
            Span::styled((*point).to_string(), body_style()),
        ]));
    }
    lines.push(blank());

    // Terminal panel header with the sample tabs.
    let mut header = vec![
        Span::styled("  ── ".to_string(), dim()),
        Span::styled("synth_output.json".to_string(), body_style()),
        Span::styled(" ── ".to_string(), dim()),
    ];
    for tab in [SampleTab::Math, SampleTab::Medical] {
        let style = if tab == showcase.tab {
            Style::new().fg(Color::White).bg(Color::Blue)
        } else {
            dim()
        };
        header.push(Span::styled(format!(" {} ", tab.label()), style));
        header.push(Span::raw(" "));
    }
    header.push(Span::styled("· Tab switches".to_string(), dim()));
    lines.push(Line::from(header));
    lines.push(styled("  ", "{", body_style()));

    // Query, typed live.
    lines.extend(typed_field_lines(&showcase.query, width));

    // Reasoning trace, played line by line.
    lines.push(Line::from(vec![
        Span::styled("    \"reasoning\": \"".to_string(), key_style()),
    ]));
    for view in showcase.trace.view() {
        match view {
            LineView::Blank => lines.push(blank()),
            LineView::Done(line) => {
                lines.push(styled("      ", line, trace_style(trace_tone(line))));
            }
            LineView::Typing(typist) => {
                let tone = trace_style(trace_tone(typist.source()));
                let mut spans = vec![
                    Span::raw("      "),
                    Span::styled(typist.visible_text().to_string(), tone),
                ];
                if typist.cursor_visible() {
                    spans.push(Span::styled(CURSOR.to_string(), Style::new().fg(Color::Green)));
                }
                lines.push(Line::from(spans));
            }
            LineView::Pending => {}
        }
    }
    lines.push(styled("    ", "\",", key_style()));

    // Answer and metadata are plain static fields.
    let sample = showcase.sample();
    lines.push(Line::from(vec![
        Span::styled("    \"answer\": ".to_string(), key_style()),
        Span::styled(format!("\"{}\"", sample.answer), Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(",".to_string(), body_style()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("    \"metadata\": ".to_string(), key_style()),
        Span::styled(
            format!("{{ \"model\": \"{}\", \"timestamp\": \"{}\" }}", sample.model, sample.timestamp),
            Style::new().fg(Color::Cyan),
        ),
    ]));
    lines.push(styled("  ", "}", body_style()));
    lines.push(blank());

    for dataset in tour.content.datasets {
        lines.push(Line::from(vec![
            Span::styled("  ⛁ ".to_string(), accent()),
            Span::styled(format!("{} ({})", dataset.name, dataset.detail), body_style()),
            Span::styled(format!("  {}", dataset.url), dim()),
        ]));
    }
    lines.push(blank());
    lines
}

/// The `"query"` field with the live typed value, wrapped to the panel.
fn typed_field_lines(query: &Typist, width: usize) -> Vec<Line<'static>> {
    let prefix = "    \"query\": \"";
    let available = inner_width(width).saturating_sub(prefix.len()).max(16);
    let mut segments = text::wrap(query.visible_text(), available);
    let last = segments.len().saturating_sub(1);

    let mut lines = Vec::new();
    for (i, segment) in segments.drain(..).enumerate() {
        let mut spans = if i == 0 {
            vec![Span::styled(prefix.to_string(), key_style())]
        } else {
            vec![Span::raw("      ".to_string())]
        };
        spans.push(Span::styled(segment, string_style()));
        if i == last {
            if query.cursor_visible() {
                spans.push(Span::styled(CURSOR.to_string(), string_style()));
            }
            spans.push(Span::styled("\",".to_string(), key_style()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn model_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let model = &tour.content.model;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("  ★ ".to_string(), Style::new().fg(Color::Yellow)),
            Span::styled(model.badge.to_string(), accent()),
        ]),
        heading(model.name),
        blank(),
    ];
    lines.extend(wrapped("  ", model.blurb, inner_width(width), body_style()));
    lines.push(blank());

    let mut stats = vec![Span::raw("  ")];
    for stat in model.stats {
        stats.push(Span::styled(stat.value.to_string(), title_style()));
        stats.push(Span::styled(format!(" {}   ", stat.label), dim()));
    }
    lines.push(Line::from(stats));
    lines.push(blank());

    for highlight in model.highlights {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ".to_string(), accent()),
            Span::styled(highlight.title.to_string(), title_style()),
        ]));
        lines.extend(wrapped("    ", highlight.description, inner_width(width), body_style()));
    }
    lines.push(blank());

    for variant in model.variants {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", variant.name), title_style()),
            Span::styled(format!("({}) ", variant.size), Style::new().fg(Color::Cyan)),
            Span::styled(format!("— {}", variant.description), dim()),
        ]));
    }
    lines.push(blank());
    lines
}

fn industries_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Built for every industry"), blank()];
    for industry in tour.content.industries {
        lines.push(styled("  ", industry.title, title_style()));
        lines.extend(wrapped("    ", industry.description, inner_width(width), body_style()));
        let chips = industry
            .stats
            .iter()
            .map(|stat| format!("· {stat}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(styled("    ", chips, dim()));
        lines.push(blank());
    }
    lines
}

fn screenshots_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let show = &tour.gallery.slideshow;
    let shots = tour.content.screenshots;
    let active = show.active_index();
    let shot = &shots[active];

    let mut lines = vec![heading("Powerful tools for data creators"), blank()];

    let mut tabs = vec![Span::raw("  ")];
    for (i, entry) in shots.iter().enumerate() {
        let style = if i == active {
            Style::new().fg(Color::White).bg(Color::Blue)
        } else {
            dim()
        };
        tabs.push(Span::styled(format!(" {} ", entry.subtitle), style));
        tabs.push(Span::raw(" "));
    }
    lines.push(Line::from(tabs));
    lines.push(blank());

    // Panel art: loaded, unavailable, or still loading.
    if let Some(art) = tour.gallery.art_for(active) {
        let style = if show.is_transitioning() { dim() } else { body_style() };
        for art_line in art.lines() {
            lines.push(styled("  ", art_line, style));
        }
    } else if show.is_unavailable(active) {
        lines.push(styled("  ", "(preview unavailable)", dim()));
    } else {
        let spinner = SPINNER_FRAMES[tour.spinner_frame % SPINNER_FRAMES.len()];
        lines.push(styled("  ", format!("{spinner} loading preview…"), accent()));
    }
    lines.push(blank());

    lines.push(Line::from(vec![
        Span::styled(format!("  {}", shot.title), title_style()),
        Span::styled(format!(" — {}", shot.subtitle), accent()),
    ]));
    lines.extend(wrapped("    ", shot.description, inner_width(width), body_style()));
    let chips = shot
        .features
        .iter()
        .map(|feature| format!("• {feature}"))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(styled("    ", chips, dim()));
    lines.push(blank());

    let mut dots = vec![Span::raw("  ")];
    for i in 0..shots.len() {
        let dot = if i == active { "●" } else { "○" };
        let style = if i == active { accent() } else { dim() };
        dots.push(Span::styled(format!("{dot} "), style));
    }
    dots.push(Span::styled(
        format!("  {} / {} — use ← → to navigate", active + 1, shots.len()),
        dim(),
    ));
    lines.push(Line::from(dots));
    lines.push(blank());
    lines
}

fn downloads_lines(tour: &TourState, width: usize) -> Vec<Line<'static>> {
    let downloads = &tour.content.downloads;
    let mut lines = vec![heading("Run SynthLabs on your desktop"), blank()];
    for platform in downloads.platforms {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", platform.name), title_style()),
            Span::styled(format!("— {} ", platform.description), body_style()),
            Span::styled(
                format!("[{}] · {}", platform.formats.join(", "), platform.requirements),
                dim(),
            ),
        ]));
    }
    lines.push(blank());
    let perks = downloads
        .perks
        .iter()
        .map(|perk| format!("✓ {perk}"))
        .collect::<Vec<_>>()
        .join("   ");
    lines.extend(wrapped("  ", &perks, inner_width(width), body_style()));
    lines.push(styled("  ", format!("Releases: {}", downloads.release_url), dim()));
    lines.push(blank());
    lines
}

fn contributors_lines(tour: &TourState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Built by the community"), blank()];
    for contributor in tour.content.contributors {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", contributor.name), title_style()),
            Span::styled(format!("@{} ", contributor.username), accent()),
            Span::styled(format!("— {}", contributor.role), body_style()),
        ]));
    }
    lines.push(blank());
    lines
}

fn footer_lines(tour: &TourState) -> Vec<Line<'static>> {
    let links = &tour.content.links;
    let mut lines = vec![heading("SynthLabs"), blank()];
    for (label, url) in [
        ("GitHub", links.repo),
        ("HuggingFace", links.huggingface),
        ("Issues", links.issues),
        ("Discussions", links.discussions),
        ("Privacy", links.privacy),
        ("Terms", links.terms),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<12}"), body_style()),
            Span::styled(url.to_string(), dim()),
        ]));
    }
    lines.push(blank());
    lines.push(styled("  ", "Press o to open the GitHub repository.", dim()));
    lines.push(styled("  ", "MIT License · Open source, no data collection.", dim()));
    lines.push(blank());
    lines
}

// ============================================================================
// Chrome
// ============================================================================

fn render_status_line(tour: &TourState, frame: &mut Frame, area: Rect) {
    let section = tour.current_section().label();
    let show = &tour.gallery.slideshow;
    let left = format!(" SynthTour · {section} ");
    let right = format!(
        " slide {}/{} · ↑↓ scroll · ←→ slides · Tab sample · q quit ",
        show.active_index() + 1,
        show.count(),
    );
    let left_width = left.width();
    let total = usize::from(area.width);
    let right = text::truncate_with_ellipsis(&right, total.saturating_sub(left_width));

    let line = Line::from(vec![
        Span::styled(left, Style::new().fg(Color::Black).bg(Color::LightBlue)),
        Span::styled(right, dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_banner(banner: &BannerState, frame: &mut Frame, area: Rect) {
    let width = area.width.clamp(30, 72);
    let body_width = usize::from(width).saturating_sub(4);

    let mut lines = vec![styled("", "We value your privacy", title_style())];
    lines.extend(wrapped(
        "",
        "SynthLabs is an open-source project that does not collect personal data or use cookies. \
         We are committed to operating transparently and respecting your digital privacy.",
        body_width,
        body_style(),
    ));
    if banner.show_details {
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled("Essential ".to_string(), Style::new().fg(Color::Green)),
            Span::styled(
                "— required for the tour to function. Cannot be disabled.".to_string(),
                dim(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Analytics ".to_string(), accent()),
            Span::styled(
                "— help us understand how visitors use the project.".to_string(),
                dim(),
            ),
        ]));
    }
    lines.push(blank());
    lines.push(Line::from(vec![
        Span::styled("[a]".to_string(), Style::new().fg(Color::Green)),
        Span::styled(" I Understand   ".to_string(), body_style()),
        Span::styled("[d]".to_string(), Style::new().fg(Color::Red)),
        Span::styled(" Decline   ".to_string(), body_style()),
        Span::styled("[i]".to_string(), accent()),
        Span::styled(" Details   ".to_string(), body_style()),
        Span::styled("[Esc]".to_string(), dim()),
        Span::styled(" Close".to_string(), body_style()),
    ]));

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(1));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(height + 1);
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Privacy Notice ")),
        rect,
    );
}
