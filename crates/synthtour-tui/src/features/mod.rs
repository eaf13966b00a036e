//! Feature slices for the tour (state + helpers per slice).

pub mod banner;
pub mod gallery;
pub mod showcase;
