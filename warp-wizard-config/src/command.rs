//! Command and command-group value types.
//!
//! A [`Command`] is a single runnable shell command; a [`CommandGroup`] is a
//! named, reusable set of commands with file markers for directory-based
//! auto-detection. Both round-trip through the group store's YAML file.

use crate::error::WizardError;
use serde::{Deserialize, Serialize};

/// A single runnable shell command.
///
/// One-shot commands share a pane in the leading tab of a generated launch
/// configuration; long-running commands each receive dedicated screen space.
/// Immutable once handed to the layout builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Shell command text. Must be non-empty.
    pub text: String,

    /// Optional display label, used as the tab title in tabs mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether this command is expected to keep running (dev server, watcher).
    #[serde(default)]
    pub long_running: bool,
}

impl Command {
    /// Create a one-shot command with no title.
    pub fn one_off(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            long_running: false,
        }
    }

    /// Create a long-running command with an optional title.
    pub fn long_running(text: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            text: text.into(),
            title: title.map(str::to_string),
            long_running: true,
        }
    }

    /// Reject empty command text before it reaches a store or the builder.
    pub fn validate(&self) -> Result<(), WizardError> {
        if self.text.trim().is_empty() {
            return Err(WizardError::InvalidArgument(
                "command text cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A named, reusable group of commands.
///
/// Groups are offered preferentially when any of their `detect_files` exist
/// in the target directory (e.g. `metro.config.js` for a React Native group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    /// Unique name across the persisted group collection.
    pub name: String,

    /// Relative file names whose presence signals this group applies.
    #[serde(default)]
    pub detect_files: Vec<String>,

    /// The group's commands, in authoring order.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl CommandGroup {
    /// Validate a group before it is persisted: non-empty name, at least one
    /// command, and every command individually valid.
    pub fn validate(&self) -> Result<(), WizardError> {
        if self.name.trim().is_empty() {
            return Err(WizardError::InvalidArgument(
                "group name cannot be empty".to_string(),
            ));
        }
        if self.commands.is_empty() {
            return Err(WizardError::InvalidArgument(format!(
                "group '{}' must contain at least one command",
                self.name
            )));
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_text_is_rejected() {
        assert!(Command::one_off("  ").validate().is_err());
        assert!(Command::one_off("npm test").validate().is_ok());
    }

    #[test]
    fn group_requires_name_and_commands() {
        let group = CommandGroup {
            name: String::new(),
            detect_files: Vec::new(),
            commands: vec![Command::one_off("ls")],
        };
        assert!(group.validate().is_err());

        let group = CommandGroup {
            name: "empty".to_string(),
            detect_files: Vec::new(),
            commands: Vec::new(),
        };
        assert!(group.validate().is_err());

        let group = CommandGroup {
            name: "rails".to_string(),
            detect_files: vec!["Gemfile".to_string()],
            commands: vec![Command::long_running("rails server", Some("server"))],
        };
        assert!(group.validate().is_ok());
    }

    #[test]
    fn command_yaml_omits_absent_title() {
        let yaml = serde_yaml_ng::to_string(&Command::one_off("ls")).unwrap();
        assert!(!yaml.contains("title"));

        let yaml =
            serde_yaml_ng::to_string(&Command::long_running("npm start", Some("dev"))).unwrap();
        assert!(yaml.contains("title: dev"));
        assert!(yaml.contains("long_running: true"));
    }

    #[test]
    fn group_roundtrips_through_yaml() {
        let group = CommandGroup {
            name: "node".to_string(),
            detect_files: vec!["package.json".to_string()],
            commands: vec![
                Command::one_off("npm install"),
                Command::long_running("npm start", Some("dev server")),
            ],
        };

        let yaml = serde_yaml_ng::to_string(&group).unwrap();
        let back: CommandGroup = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(back, group);
    }
}
