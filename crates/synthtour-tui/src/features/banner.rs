//! Privacy-notice banner overlay.
//!
//! Shown only when no consent record exists. Accepting or declining
//! persists the choice through the injected store; closing the banner
//! persists nothing, so it returns on the next run.

#[derive(Debug, Default)]
pub struct BannerState {
    /// Whether the cookie-type details are expanded.
    pub show_details: bool,
}
