//! Storage for finished launch-configuration files.
//!
//! Configurations are written one YAML document per file into Warp's
//! `launch_configurations` directory. The file identifier is derived from the
//! configuration name (every non-alphanumeric character replaced with `-`,
//! lower-cased); a collision with an existing file auto-resolves by appending
//! `-1`, `-2`, … until unique. Collisions are not errors.

use crate::error::WizardError;
use crate::launch_config::LaunchConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Derive the base file identifier for a configuration name.
///
/// `"My App!"` becomes `"my-app-"`: each non-alphanumeric character maps to
/// its own `-`, then the whole string is lower-cased.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}

/// Store over Warp's launch-configurations directory.
#[derive(Debug, Clone)]
pub struct LaunchConfigStore {
    dir: PathBuf,
}

impl LaunchConfigStore {
    /// Create a store over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a configuration, returning the path it was saved to.
    ///
    /// The configuration is validated first; an unnamed or windowless tree is
    /// never written to disk.
    pub fn save(&self, config: &LaunchConfig) -> Result<PathBuf, WizardError> {
        config.validate()?;
        fs::create_dir_all(&self.dir)?;

        let path = self.unique_path(&config.name);
        let contents = config.to_yaml()?;
        fs::write(&path, contents)?;
        log::info!("Saved launch config '{}' to {:?}", config.name, path);
        Ok(path)
    }

    /// Read and validate a configuration file.
    pub fn load(&self, path: &Path) -> Result<LaunchConfig, WizardError> {
        let contents = fs::read_to_string(path)?;
        LaunchConfig::from_yaml(&contents)
    }

    /// All `.yaml` files in the store directory, sorted by file name.
    ///
    /// An absent directory lists as empty rather than erroring, so the link
    /// flow works before anything has been saved.
    pub fn list(&self) -> Result<Vec<PathBuf>, WizardError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// First free `<id>.yaml` path for a configuration name.
    fn unique_path(&self, name: &str) -> PathBuf {
        let id = sanitize_name(name);
        let mut path = self.dir.join(format!("{id}.yaml"));
        let mut suffix = 1;
        while path.exists() {
            path = self.dir.join(format!("{id}-{suffix}.yaml"));
            suffix += 1;
        }
        path
    }
}
