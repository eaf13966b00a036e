//! Consent subcommands.

use anyhow::{Context, Result};
use synthtour_core::consent::{ConsentStore, FileConsentStore};

pub fn show() -> Result<()> {
    let store = FileConsentStore::at_default_path();
    match store.load()? {
        Some(record) => println!("{} on {}", record.consent.as_str(), record.date.to_rfc3339()),
        None => println!("No consent recorded."),
    }
    Ok(())
}

pub fn reset() -> Result<()> {
    let store = FileConsentStore::at_default_path();
    let path = store.path();
    if path.exists() {
        std::fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
        println!("Cleared stored consent.");
    } else {
        println!("No consent recorded.");
    }
    Ok(())
}
