//! Launch-configuration wizard flows.
//!
//! The default flow either replays the configuration linked to the current
//! directory or walks the user through creating one: pick commands (group
//! auto-detection first), resolve placeholders, choose a layout, build the
//! tab/pane tree, persist it, and link it to the directory.

use crate::activation;
use crate::placeholders;
use crate::prompt;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use warp_wizard_config::{
    Command, CommandGroup, DirectoryLinkStore, GroupStore, LaunchConfig, LaunchConfigStore,
    WizardPaths,
};
use warp_wizard_layout::{LayoutMode, build, classify};

/// Wizard over one working directory and the injected stores.
pub struct LaunchWizard {
    groups: GroupStore,
    links: DirectoryLinkStore,
    store: LaunchConfigStore,
    dir: PathBuf,
}

impl LaunchWizard {
    /// Create a wizard for `dir` using the resolved store locations.
    pub fn new(paths: &WizardPaths, dir: PathBuf) -> Self {
        Self {
            groups: GroupStore::new(&paths.group_file),
            links: DirectoryLinkStore::new(&paths.directory_links_file),
            store: LaunchConfigStore::new(&paths.launch_config_dir),
            dir,
        }
    }

    /// Default action: activate the linked config, or create a new one.
    pub fn run_default(&self) -> Result<()> {
        match self.links.get(&self.dir)? {
            Some(config_path) => self.activate_config(Path::new(&config_path)),
            None => self.create(),
        }
    }

    /// Walk through creating a new launch configuration.
    pub fn create(&self) -> Result<()> {
        println!("Create a new launch configuration");

        let default_name = self
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let name = prompt::required_text("Launch config name?", default_name.as_deref())?;

        let mut commands = self.select_group_commands()?;
        self.collect_custom_commands(&mut commands)?;

        let commands = placeholders::resolve_commands(commands)?;
        let (one_off, long_running) = classify(&commands);
        crate::debug_info!(
            "WIZARD",
            "Selected {} one-off and {} long-running commands",
            one_off.len(),
            long_running.len()
        );

        let (mode, max_panes) = if long_running.is_empty() {
            (LayoutMode::Tabs, 1)
        } else {
            self.choose_layout()?
        };

        let cwd = self.dir.to_string_lossy();
        let tabs = build(&one_off, &long_running, &cwd, mode, max_panes)?;
        let config = LaunchConfig::single_window(name.as_str(), tabs);

        let config_path = self
            .store
            .save(&config)
            .with_context(|| format!("Failed to save launch config '{name}'"))?;
        self.links.link(&self.dir, &config_path)?;

        println!("Launch config created: {}", config_path.display());
        println!(
            "Heads up: it takes about {} seconds for Warp to register the new launch config.",
            activation::WARP_REGISTRATION_DELAY_SECS
        );
        if prompt::confirm("Do you want me to wait with you?", true)? {
            activation::wait_for_registration()?;
        }
        if prompt::confirm("Do you want to run your launch config now?", true)? {
            activation::activate(&config.name)?;
        }
        println!("All done!");
        Ok(())
    }

    /// Open the linked config for editing, offering creation when none exists.
    pub fn edit(&self) -> Result<()> {
        let Some(config_path) = self.links.get(&self.dir)? else {
            println!("No launch config found for this directory.");
            if prompt::confirm("Would you like to create a new one?", true)? {
                return self.create();
            }
            return Ok(());
        };

        println!("Config associated with this directory: {config_path}");
        let choice = prompt::select(
            "What would you like to do?",
            &[
                "Open it in the default editor".to_string(),
                "Reveal it in the file manager".to_string(),
            ],
        )?;

        let path = Path::new(&config_path);
        match choice {
            0 => open::that(path)?,
            _ => {
                let parent = path.parent().unwrap_or(Path::new("."));
                open::that(parent)?;
            }
        }
        Ok(())
    }

    /// Remove the directory association, if any.
    pub fn unlink(&self) -> Result<()> {
        let Some(config_path) = self.links.get(&self.dir)? else {
            println!("No launch config associated with this directory, nothing to unlink.");
            return Ok(());
        };

        println!("Config associated with this directory: {config_path}");
        if prompt::confirm(
            "Are you sure you want to unlink this launch config?",
            false,
        )? {
            self.links.unlink(&self.dir)?;
            println!("Launch config unlinked.");
        }
        Ok(())
    }

    /// Associate an existing launch config with the directory.
    pub fn link(&self) -> Result<()> {
        if let Some(existing) = self.links.get(&self.dir)? {
            println!("Currently associated with this directory: {existing}");
            if !prompt::confirm("Do you want to unlink it and link a new one?", false)? {
                return Ok(());
            }
        }

        let configs = self.store.list()?;
        if configs.is_empty() {
            println!("No launch configs found, nothing to link.");
            if prompt::confirm("Create a new launch config?", true)? {
                return self.create();
            }
            return Ok(());
        }

        let labels: Vec<String> = configs
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy().into_owned())
            .collect();
        let choice = prompt::select("Select a launch config to link", &labels)?;

        self.links.link(&self.dir, &configs[choice])?;
        println!("Launch config linked.");
        Ok(())
    }

    /// Load, validate, and activate a persisted configuration.
    fn activate_config(&self, path: &Path) -> Result<()> {
        let config = self
            .store
            .load(path)
            .with_context(|| format!("Failed to load launch config {path:?}"))?;
        activation::activate(&config.name)
    }

    /// Pick commands from an auto-detected or user-selected group.
    fn select_group_commands(&self) -> Result<Vec<Command>> {
        if let Some(group) = self.groups.detect(&self.dir)? {
            println!("Auto-detected command group: {}", group.name);
            return self.select_from_group(&group);
        }

        let groups = self.groups.load()?;
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let mut labels: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
        labels.push("None of the above".to_string());
        let choice = prompt::select("Select a group:", &labels)?;
        if choice == groups.len() {
            return Ok(Vec::new());
        }
        self.select_from_group(&groups[choice])
    }

    /// Multi-select within one group's commands.
    fn select_from_group(&self, group: &CommandGroup) -> Result<Vec<Command>> {
        let labels: Vec<String> = group
            .commands
            .iter()
            .map(|c| c.title.clone().unwrap_or_else(|| c.text.clone()))
            .collect();
        let indices = prompt::multi_select("Commands to run:", &labels)?;
        Ok(indices
            .into_iter()
            .map(|i| group.commands[i].clone())
            .collect())
    }

    /// Append ad hoc commands until the user leaves the prompt blank.
    fn collect_custom_commands(&self, commands: &mut Vec<Command>) -> Result<()> {
        loop {
            let Some(text) = prompt::text("Add custom command (leave blank to skip):", None)?
            else {
                return Ok(());
            };

            let long_running = prompt::confirm("Long running?", false)?;
            let title = if long_running {
                prompt::text("Custom command title (shows as the tab title):", None)?
            } else {
                None
            };

            commands.push(Command {
                text,
                title,
                long_running,
            });
        }
    }

    /// Ask how long-running commands should be arranged.
    fn choose_layout(&self) -> Result<(LayoutMode, usize)> {
        let choice = prompt::select(
            "Select a layout for your long running processes:",
            &[
                "One per tab".to_string(),
                "Auto layout in panes".to_string(),
            ],
        )?;
        if choice == 0 {
            return Ok((LayoutMode::Tabs, 1));
        }

        // Validated here so an out-of-contract size never reaches the builder.
        let max_panes = prompt::positive_number("Max number of panes per tab?", 4)?;
        Ok((LayoutMode::Panes, max_panes))
    }
}
