//! Data model and persistence for the warp-wizard launch-configuration tool.
//!
//! This crate provides everything that touches disk or the wire format:
//!
//! - Command and command-group value types
//! - The Warp launch-configuration YAML schema (windows / tabs / pane splits)
//! - Typed error variants for store and schema failures
//! - Path resolution for the wizard's own state files
//! - The three persistent stores: command groups, directory links, and
//!   launch-configuration files
//!
//! The layout-generation algorithm itself lives in `warp-wizard-layout`; the
//! interactive wizard lives in the root `warp-wizard` crate. Both depend on
//! the types defined here.

pub mod command;
pub mod directory_links;
pub mod error;
pub mod groups;
pub mod launch_config;
pub mod launch_store;
pub mod paths;

// Re-export main types for convenience
pub use command::{Command, CommandGroup};
pub use directory_links::DirectoryLinkStore;
pub use error::WizardError;
pub use groups::GroupStore;
pub use launch_config::{
    CommandLayout, CommandSpec, LaunchConfig, LaunchTab, LaunchWindow, LayoutNode, SplitDirection,
    SplitLayout, TabColor,
};
pub use launch_store::{LaunchConfigStore, sanitize_name};
pub use paths::WizardPaths;
