//! Prints a SYNTH sample record as JSON (non-interactive escape hatch).

use anyhow::{Context, Result};
use synthtour_core::content::Content;

pub fn run(medical: bool) -> Result<()> {
    let samples = Content::builtin().samples;
    let record = if medical { samples.medical } else { samples.math };
    let json = serde_json::to_string_pretty(&record).context("serialize sample record")?;
    println!("{json}");
    Ok(())
}
