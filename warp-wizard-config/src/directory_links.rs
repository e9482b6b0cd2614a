//! Persistent directory → launch-configuration association.
//!
//! A flat YAML map keyed by absolute directory path, stored in
//! `~/.warp-wizard/directory-launch-configs.yaml`. Each mutation persists
//! immediately; there is a single writer (the interactive wizard).

use crate::error::WizardError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store over the directory-link YAML map.
#[derive(Debug, Clone)]
pub struct DirectoryLinkStore {
    path: PathBuf,
}

impl DirectoryLinkStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full map. Missing or empty file yields an empty map.
    pub fn load(&self) -> Result<BTreeMap<String, String>, WizardError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let links: BTreeMap<String, String> = serde_yaml_ng::from_str(&contents)?;
        Ok(links)
    }

    /// The config path linked to `dir`, if any.
    pub fn get(&self, dir: &Path) -> Result<Option<String>, WizardError> {
        Ok(self.load()?.get(&key(dir)).cloned())
    }

    /// Associate `dir` with a launch-config file path, replacing any
    /// existing link.
    pub fn link(&self, dir: &Path, config_path: &Path) -> Result<(), WizardError> {
        let mut links = self.load()?;
        links.insert(key(dir), config_path.to_string_lossy().into_owned());
        self.save(&links)?;
        log::info!("Linked {:?} -> {:?}", dir, config_path);
        Ok(())
    }

    /// Remove the association for `dir`. Returns whether a link existed.
    pub fn unlink(&self, dir: &Path) -> Result<bool, WizardError> {
        let mut links = self.load()?;
        let existed = links.remove(&key(dir)).is_some();
        if existed {
            self.save(&links)?;
            log::info!("Unlinked {:?}", dir);
        }
        Ok(existed)
    }

    fn save(&self, links: &BTreeMap<String, String>) -> Result<(), WizardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml_ng::to_string(links)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn key(dir: &Path) -> String {
    dir.to_string_lossy().into_owned()
}
