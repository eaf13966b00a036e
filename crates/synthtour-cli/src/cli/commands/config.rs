//! Config subcommands.

use anyhow::Result;
use synthtour_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = Config::init()?;
    println!("Config file: {}", path.display());
    Ok(())
}
