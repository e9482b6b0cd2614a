//! Typed error variants for the warp-wizard crates.
//!
//! Provides structured error types for store I/O, schema validation, and
//! layout-contract violations. These are used internally and exposed for
//! consumers who want to match on specific failure modes instead of opaque
//! `anyhow` strings.

use std::fmt;

/// Errors that can occur in the stores, the schema codec, or the layout core.
///
/// For callers that use `anyhow` (the wizard binary does), values are
/// automatically coerced via the `From` impl that `anyhow` provides for any
/// `std::error::Error`.
#[derive(Debug)]
pub enum WizardError {
    /// An I/O error occurred reading or writing a state file.
    Io(std::io::Error),

    /// A state file contained invalid YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),

    /// A caller-supplied value violated an input contract.
    ///
    /// Covers a chunk size below 1 reaching the pane chunker and empty
    /// required text fields (group name, command text). The inner string
    /// describes which argument is invalid and why. Never silently corrected.
    InvalidArgument(String),

    /// A persisted launch configuration is missing required structure
    /// (`name`, at least one window, or a layout node with neither a
    /// `split_direction` nor a `cwd`/`commands` pair).
    ///
    /// Callers must not activate or render a configuration that fails with
    /// this variant.
    MalformedConfiguration(String),

    /// A command-group name collided with an existing group.
    ///
    /// Launch-configuration *identifier* collisions are not an error; they
    /// auto-resolve with a numeric suffix (see `launch_store`).
    DuplicateName(String),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Io(e) => write!(f, "I/O error: {e}"),
            WizardError::Parse(e) => write!(f, "YAML parse error: {e}"),
            WizardError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            WizardError::MalformedConfiguration(msg) => {
                write!(f, "Malformed launch configuration: {msg}")
            }
            WizardError::DuplicateName(name) => {
                write!(f, "Name already exists: {name}")
            }
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WizardError::Io(e) => Some(e),
            WizardError::Parse(e) => Some(e),
            WizardError::InvalidArgument(_)
            | WizardError::MalformedConfiguration(_)
            | WizardError::DuplicateName(_) => None,
        }
    }
}

impl From<std::io::Error> for WizardError {
    fn from(e: std::io::Error) -> Self {
        WizardError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for WizardError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        WizardError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_field() {
        let err = WizardError::InvalidArgument("chunk size must be at least 1".to_string());
        assert!(err.to_string().contains("chunk size"));

        let err = WizardError::DuplicateName("rails".to_string());
        assert!(err.to_string().contains("rails"));
    }

    #[test]
    fn io_errors_expose_a_source() {
        use std::error::Error;
        let err = WizardError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());

        let err = WizardError::MalformedConfiguration("missing name".to_string());
        assert!(err.source().is_none());
    }
}
