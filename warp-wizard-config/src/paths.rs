//! Path resolution for the wizard's state files.
//!
//! The wizard keeps its own state under `~/.warp-wizard/` and writes finished
//! launch configurations where Warp reads them, `~/.warp/launch_configurations/`.
//! All locations are carried in one explicit [`WizardPaths`] value constructed
//! at process start and injected into the stores; nothing reads a global path
//! at module load time.

use crate::error::WizardError;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved locations of every file the wizard touches.
#[derive(Debug, Clone)]
pub struct WizardPaths {
    /// `~/.warp-wizard`
    pub config_dir: PathBuf,
    /// `~/.warp-wizard/command-groups.yaml`
    pub group_file: PathBuf,
    /// `~/.warp-wizard/directory-launch-configs.yaml`
    pub directory_links_file: PathBuf,
    /// `~/.warp/launch_configurations`
    pub launch_config_dir: PathBuf,
}

impl WizardPaths {
    /// Resolve the default locations under the user's home directory.
    pub fn resolve() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::under_home(&home)
    }

    /// Resolve all locations relative to an explicit home directory.
    ///
    /// Used by tests to point the stores at a temp dir.
    pub fn under_home(home: &Path) -> Self {
        let config_dir = home.join(".warp-wizard");
        Self {
            group_file: config_dir.join("command-groups.yaml"),
            directory_links_file: config_dir.join("directory-launch-configs.yaml"),
            launch_config_dir: home.join(".warp").join("launch_configurations"),
            config_dir,
        }
    }

    /// Create missing directories and seed missing store files empty.
    pub fn ensure(&self) -> Result<(), WizardError> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.launch_config_dir)?;
        for file in [&self.group_file, &self.directory_links_file] {
            if !file.exists() {
                fs::write(file, "")?;
            }
        }
        log::info!("Wizard state dir: {:?}", self.config_dir);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_creates_dirs_and_seeds_files() {
        let temp = tempdir().unwrap();
        let paths = WizardPaths::under_home(temp.path());

        paths.ensure().unwrap();

        assert!(paths.config_dir.is_dir());
        assert!(paths.launch_config_dir.is_dir());
        assert!(paths.group_file.is_file());
        assert!(paths.directory_links_file.is_file());
    }

    #[test]
    fn ensure_leaves_existing_files_alone() {
        let temp = tempdir().unwrap();
        let paths = WizardPaths::under_home(temp.path());
        paths.ensure().unwrap();

        fs::write(&paths.group_file, "- name: keepme\n  commands: []\n").unwrap();
        paths.ensure().unwrap();

        let contents = fs::read_to_string(&paths.group_file).unwrap();
        assert!(contents.contains("keepme"));
    }
}
