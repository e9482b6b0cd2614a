//! Command-line interface for warp-wizard.
//!
//! This module handles CLI argument parsing and maps flags/subcommands to a
//! single wizard action.

use clap::{Parser, Subcommand};

/// warp-wizard - Generate Warp terminal launch configurations
#[derive(Parser)]
#[command(name = "warp-wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Edit the launch config associated with the current directory
    #[arg(short, long)]
    pub edit: bool,

    /// Unlink the launch config associated with the current directory
    #[arg(short, long)]
    pub unlink: bool,

    /// Associate an existing launch config with the current directory
    #[arg(short, long)]
    pub link: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage reusable command groups
    Groups {
        /// Open the command-group store file instead of creating a group
        #[arg(short, long)]
        edit: bool,
    },
}

/// The single action a wizard invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Activate the linked config, or run the creation wizard.
    Launch,
    /// Open the linked config for editing.
    Edit,
    /// Remove the directory association.
    Unlink,
    /// Associate an existing config with the directory.
    Link,
    /// Create a new command group.
    CreateGroup,
    /// Open the group store file for editing.
    EditGroups,
}

/// Process CLI arguments into a wizard action.
pub fn process_cli() -> WizardAction {
    action_for(Cli::parse())
}

fn action_for(cli: Cli) -> WizardAction {
    match cli.command {
        Some(Commands::Groups { edit }) => {
            if edit {
                WizardAction::EditGroups
            } else {
                WizardAction::CreateGroup
            }
        }
        None => {
            if cli.edit {
                WizardAction::Edit
            } else if cli.unlink {
                WizardAction::Unlink
            } else if cli.link {
                WizardAction::Link
            } else {
                WizardAction::Launch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> WizardAction {
        action_for(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn no_arguments_launches() {
        assert_eq!(parse(&["warp-wizard"]), WizardAction::Launch);
    }

    #[test]
    fn flags_map_to_actions() {
        assert_eq!(parse(&["warp-wizard", "--edit"]), WizardAction::Edit);
        assert_eq!(parse(&["warp-wizard", "--unlink"]), WizardAction::Unlink);
        assert_eq!(parse(&["warp-wizard", "--link"]), WizardAction::Link);
    }

    #[test]
    fn edit_takes_precedence_over_link_flags() {
        assert_eq!(
            parse(&["warp-wizard", "--edit", "--link", "--unlink"]),
            WizardAction::Edit
        );
    }

    #[test]
    fn groups_subcommand() {
        assert_eq!(parse(&["warp-wizard", "groups"]), WizardAction::CreateGroup);
        assert_eq!(
            parse(&["warp-wizard", "groups", "--edit"]),
            WizardAction::EditGroups
        );
    }
}
