//! Full-screen terminal tour of the SynthLabs product.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TourRuntime;
use synthtour_core::config::Config;
use synthtour_core::consent::ConsentStore;
use synthtour_core::content::Content;

/// Runs the interactive tour.
pub async fn run_tour(
    config: Config,
    content: Content,
    consent: Box<dyn ConsentStore + Send>,
) -> Result<()> {
    // The tour requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The tour requires a terminal.\n\
             Use `synthtour sample` for non-interactive output."
        );
    }

    let mut runtime = TourRuntime::new(config, content, consent)?;
    runtime.run()?;

    Ok(())
}
