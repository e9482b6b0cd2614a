//! Command-group wizard flows.

use crate::prompt;
use anyhow::Result;
use warp_wizard_config::{Command, CommandGroup, GroupStore, WizardPaths};

/// Walk through creating a new command group.
pub fn create_group(paths: &WizardPaths) -> Result<()> {
    let store = GroupStore::new(&paths.group_file);
    let existing = store.load()?;

    println!("Add a new command group");

    let name = loop {
        let name = prompt::required_text("Group name:", None)?;
        if existing.iter().any(|g| g.name == name) {
            println!("Group name already exists.");
            continue;
        }
        break name;
    };

    let mut detect_files = Vec::new();
    loop {
        let message = if detect_files.is_empty() {
            "Auto-select group when file is detected in directory (leave blank to continue):"
        } else {
            "Add another file to look for? (leave blank to continue)"
        };
        let Some(file) = prompt::text(message, None)? else {
            break;
        };
        detect_files.push(file);
    }

    println!("To use a placeholder in a command, prefix it with WARP_WIZARD_.");
    println!("The wizard will prompt for a value when the command is used,");
    println!("defaulting to the matching environment variable if set.");

    let mut commands = Vec::new();
    loop {
        let message = if commands.is_empty() {
            "Command to run:"
        } else {
            "Command to run (leave blank to continue):"
        };
        let text = if commands.is_empty() {
            // A group needs at least one command to finalize.
            Some(prompt::required_text(message, None)?)
        } else {
            prompt::text(message, None)?
        };
        let Some(text) = text else {
            break;
        };

        let title = prompt::text("Command title (optional, shows as the tab title):", None)?;
        let long_running = prompt::confirm("Long running?", false)?;

        commands.push(Command {
            text,
            title,
            long_running,
        });
    }

    store.add(CommandGroup {
        name: name.clone(),
        detect_files,
        commands,
    })?;
    crate::debug_info!("GROUPS", "Created command group '{name}'");
    println!("{name} group created!");
    Ok(())
}

/// Open the group store file in the default editor.
pub fn edit_groups(paths: &WizardPaths) -> Result<()> {
    println!("Command groups file: {}", paths.group_file.display());
    open::that(&paths.group_file)?;
    Ok(())
}
