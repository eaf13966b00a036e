//! Privacy-notice consent persistence.
//!
//! A single choice plus a timestamp, stored under two well-known keys in
//! a small TOML file. Read once at startup to decide whether the banner
//! shows, written once per user choice. Components receive the store as
//! an injected collaborator so tests can substitute their own.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ConsentChoice::Accepted => "accepted",
            ConsentChoice::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub consent: ConsentChoice,
    /// When the choice was made (RFC 3339 in the file).
    pub date: DateTime<Utc>,
}

impl ConsentRecord {
    pub fn new(consent: ConsentChoice) -> Self {
        Self {
            consent,
            date: Utc::now(),
        }
    }
}

/// Injected persistence collaborator for the consent flag.
pub trait ConsentStore {
    fn load(&self) -> Result<Option<ConsentRecord>>;
    fn save(&self, record: &ConsentRecord) -> Result<()>;
}

/// File-backed store under the SynthTour home directory.
#[derive(Debug, Clone)]
pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn at_default_path() -> Self {
        Self::new(paths::consent_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ConsentStore for FileConsentStore {
    fn load(&self) -> Result<Option<ConsentRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read consent file {}", self.path.display()))?;
        let record = toml::from_str(&raw)
            .with_context(|| format!("parse consent file {}", self.path.display()))?;
        Ok(Some(record))
    }

    fn save(&self, record: &ConsentRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create consent dir {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(record).context("serialize consent record")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("write consent file {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileConsentStore::new(dir.path().join("consent.toml"));
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_roundtrip_preserves_choice_and_date() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileConsentStore::new(dir.path().join("nested").join("consent.toml"));

        let record = ConsentRecord::new(ConsentChoice::Accepted);
        store.save(&record).expect("save");

        let loaded = store.load().expect("load").expect("record");
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_decline_overwrites_accept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileConsentStore::new(dir.path().join("consent.toml"));

        store
            .save(&ConsentRecord::new(ConsentChoice::Accepted))
            .expect("save accept");
        store
            .save(&ConsentRecord::new(ConsentChoice::Declined))
            .expect("save decline");

        let loaded = store.load().expect("load").expect("record");
        assert_eq!(loaded.consent, ConsentChoice::Declined);
    }

    #[test]
    fn test_file_uses_well_known_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileConsentStore::new(dir.path().join("consent.toml"));
        store
            .save(&ConsentRecord::new(ConsentChoice::Declined))
            .expect("save");

        let raw = std::fs::read_to_string(store.path()).expect("read");
        assert!(raw.contains("consent = \"declined\""));
        assert!(raw.contains("date = "));
    }
}
