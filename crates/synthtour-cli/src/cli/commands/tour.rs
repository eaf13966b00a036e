//! Default command: run the interactive tour.

use anyhow::{Context, Result};
use synthtour_core::config::Config;
use synthtour_core::consent::FileConsentStore;
use synthtour_core::content::Content;

pub async fn run(config: Config) -> Result<()> {
    let content = Content::builtin();
    content.validate().context("validate tour content")?;

    let consent = Box::new(FileConsentStore::at_default_path());
    synthtour_tui::run_tour(config, content, consent).await
}
