//! Application state composition.
//!
//! `AppState` combines the scrollable tour page (`TourState`) with the
//! optional consent banner overlay, so banner key handling can mutate
//! both without borrow conflicts.

use synthtour_core::config::Config;
use synthtour_core::content::Content;

use crate::features::banner::BannerState;
use crate::features::gallery::GalleryState;
use crate::features::showcase::ShowcaseState;

/// Page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Providers,
    Features,
    DataShowcase,
    Model,
    Industries,
    Screenshots,
    Downloads,
    Contributors,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 10] = [
        SectionId::Hero,
        SectionId::Providers,
        SectionId::Features,
        SectionId::DataShowcase,
        SectionId::Model,
        SectionId::Industries,
        SectionId::Screenshots,
        SectionId::Downloads,
        SectionId::Contributors,
        SectionId::Footer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Welcome",
            SectionId::Providers => "Ecosystem",
            SectionId::Features => "Features",
            SectionId::DataShowcase => "SYNTH Format",
            SectionId::Model => "Model",
            SectionId::Industries => "Industries",
            SectionId::Screenshots => "Screenshots",
            SectionId::Downloads => "Download",
            SectionId::Contributors => "Contributors",
            SectionId::Footer => "Links",
        }
    }
}

/// Combined application state.
pub struct AppState {
    pub tour: TourState,
    /// Consent banner overlay; present only while undecided this run.
    pub banner: Option<BannerState>,
}

impl AppState {
    pub fn new(config: Config, content: Content, consent_recorded: bool) -> Self {
        Self {
            tour: TourState::new(config, content),
            banner: (!consent_recorded).then(BannerState::default),
        }
    }
}

/// The scrollable tour page.
pub struct TourState {
    pub should_quit: bool,
    pub config: Config,
    pub content: Content,
    pub showcase: ShowcaseState,
    pub gallery: GalleryState,
    /// First page row visible in the viewport.
    pub scroll: usize,
    /// Terminal size from the last frame.
    pub viewport: (u16, u16),
    /// Section heights at the current width, in scroll order.
    pub layout: Vec<(SectionId, usize)>,
    pub content_height: usize,
    /// Loading-placeholder animation frame counter.
    pub spinner_frame: usize,
}

impl TourState {
    pub fn new(config: Config, content: Content) -> Self {
        let showcase = ShowcaseState::new(content.samples, config.typing.clone());
        let gallery = GalleryState::new(content.screenshots.len());
        Self {
            should_quit: false,
            config,
            content,
            showcase,
            gallery,
            scroll: 0,
            viewport: (0, 0),
            layout: Vec::new(),
            content_height: 0,
            spinner_frame: 0,
        }
    }

    /// Rows available for the page body (the status line takes one).
    pub fn body_height(&self) -> usize {
        usize::from(self.viewport.1).saturating_sub(1)
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.body_height())
    }

    /// Page row range occupied by a section, per the current layout.
    pub fn section_bounds(&self, id: SectionId) -> Option<(usize, usize)> {
        let mut top = 0;
        for (section, height) in &self.layout {
            if *section == id {
                return Some((top, top + height));
            }
            top += height;
        }
        None
    }

    /// The section under the top of the viewport, for the status line.
    pub fn current_section(&self) -> SectionId {
        let mut top = 0;
        for (section, height) in &self.layout {
            if self.scroll < top + height {
                return *section;
            }
            top += height;
        }
        SectionId::Footer
    }

    /// Whether a section crosses the activation threshold: its top is
    /// above the lower fifth of the viewport and it has not scrolled
    /// fully past.
    pub fn section_in_view(&self, id: SectionId) -> bool {
        let Some((top, bottom)) = self.section_bounds(id) else {
            return false;
        };
        let threshold = self.scroll + self.body_height() * 4 / 5;
        top < threshold && bottom > self.scroll
    }
}
