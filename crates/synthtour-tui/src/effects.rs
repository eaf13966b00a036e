//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent I/O only; the reducer itself never touches
//! the filesystem or spawns tasks.

use std::path::PathBuf;

use synthtour_core::consent::ConsentRecord;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Load a slide's text art asynchronously. The result comes back as
    /// `UiEvent::ArtLoaded` tagged with the same generation.
    LoadArt {
        generation: u64,
        index: usize,
        path: PathBuf,
    },

    /// Persist the user's privacy choice.
    SaveConsent { record: ConsentRecord },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
