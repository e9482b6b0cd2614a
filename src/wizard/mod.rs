//! Interactive wizard flows.
//!
//! `launch` drives launch-configuration creation, activation, and the
//! link/unlink/edit maintenance flows; `groups` manages the reusable
//! command-group collection. Both operate on stores injected via
//! [`warp_wizard_config::WizardPaths`]; no flow touches a global path.

pub mod groups;
pub mod launch;

pub use launch::LaunchWizard;
