//! Persistent store for command groups.
//!
//! Groups are stored as a YAML list in `~/.warp-wizard/command-groups.yaml`.
//! A missing or empty file is an empty collection; a corrupt file is an
//! error, never silently discarded.

use crate::command::CommandGroup;
use crate::error::WizardError;
use std::fs;
use std::path::{Path, PathBuf};

/// Store over the command-group YAML file.
#[derive(Debug, Clone)]
pub struct GroupStore {
    path: PathBuf,
}

impl GroupStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all groups. Missing or empty file yields an empty vec.
    pub fn load(&self) -> Result<Vec<CommandGroup>, WizardError> {
        if !self.path.exists() {
            log::info!("No group file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let groups: Vec<CommandGroup> = serde_yaml_ng::from_str(&contents)?;
        Ok(groups)
    }

    /// Save the full group collection, creating the parent dir if needed.
    pub fn save(&self, groups: &[CommandGroup]) -> Result<(), WizardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml_ng::to_string(groups)?;
        fs::write(&self.path, contents)?;
        log::info!("Saved {} command groups to {:?}", groups.len(), self.path);
        Ok(())
    }

    /// Validate and append a group, rejecting duplicate names outright.
    ///
    /// Returns the updated collection on success.
    pub fn add(&self, group: CommandGroup) -> Result<Vec<CommandGroup>, WizardError> {
        group.validate()?;

        let mut groups = self.load()?;
        if groups.iter().any(|existing| existing.name == group.name) {
            return Err(WizardError::DuplicateName(group.name));
        }

        groups.push(group);
        self.save(&groups)?;
        Ok(groups)
    }

    /// Find the first group (store order) with any detection file present in
    /// `dir`.
    pub fn detect(&self, dir: &Path) -> Result<Option<CommandGroup>, WizardError> {
        let groups = self.load()?;
        Ok(groups.into_iter().find(|group| {
            group
                .detect_files
                .iter()
                .any(|marker| dir.join(marker).exists())
        }))
    }
}
