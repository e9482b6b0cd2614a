//! Warp launch-configuration schema types.
//!
//! Mirrors the YAML document Warp loads from `~/.warp/launch_configurations`:
//! a named list of windows, each a list of tabs, each tab holding one layout
//! tree. A layout node is either a flat command list (`cwd` + `commands`) or
//! a recursive split (`split_direction` + `panes`); the external schema
//! overloads a single `layout` field for both, so deserialization branches
//! explicitly on the presence of `split_direction` rather than duck-typing.
//!
//! Unknown extra fields are ignored everywhere for forward compatibility
//! with newer Warp schema revisions.

use crate::error::WizardError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Orientation of a pane split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Children are laid out side by side.
    Horizontal,
    /// Children are stacked top to bottom.
    Vertical,
}

/// The six tab colors Warp accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

/// A single command invocation inside a pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Shell command line to execute.
    pub exec: String,
}

/// Leaf layout: one pane running an ordered list of commands in a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLayout {
    /// Absolute working directory for the pane.
    pub cwd: String,

    /// Commands executed in order in this pane.
    pub commands: Vec<CommandSpec>,
}

/// Interior layout: a split holding an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLayout {
    /// Orientation of this split.
    pub split_direction: SplitDirection,

    /// Child nodes, mixed depth.
    pub panes: Vec<LayoutNode>,
}

/// A node in a tab's layout tree.
///
/// Serializes flat (the variant's fields appear directly under `layout:`).
/// Deserialization checks the `split_direction` discriminant explicitly: a
/// mapping carrying it is a [`SplitLayout`], otherwise it must carry both
/// `cwd` and `commands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LayoutNode {
    /// A flat command list in one pane.
    Commands(CommandLayout),
    /// A recursive split.
    Split(SplitLayout),
}

impl LayoutNode {
    /// Convenience constructor for a leaf node.
    pub fn commands(cwd: impl Into<String>, commands: Vec<CommandSpec>) -> Self {
        LayoutNode::Commands(CommandLayout {
            cwd: cwd.into(),
            commands,
        })
    }

    /// Convenience constructor for a split node.
    pub fn split(split_direction: SplitDirection, panes: Vec<LayoutNode>) -> Self {
        LayoutNode::Split(SplitLayout {
            split_direction,
            panes,
        })
    }
}

/// Prefix of every node-shape error raised in [`LayoutNode`]'s
/// `Deserialize` impl. serde_yaml_ng flattens custom errors into plain
/// strings, so [`LaunchConfig::from_yaml`] recognizes ours by this prefix.
const NODE_SHAPE_ERROR: &str = "invalid layout node";

/// Raw mirror of a layout mapping with every field optional, used to check
/// the discriminant before committing to a variant.
#[derive(Deserialize)]
struct RawLayoutNode {
    #[serde(default)]
    split_direction: Option<SplitDirection>,
    #[serde(default)]
    panes: Option<Vec<LayoutNode>>,
    #[serde(default)]
    cwd: Option<String>,
    #[serde(default)]
    commands: Option<Vec<CommandSpec>>,
}

impl<'de> Deserialize<'de> for LayoutNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawLayoutNode::deserialize(deserializer)?;
        match raw.split_direction {
            Some(split_direction) => {
                let panes = raw.panes.ok_or_else(|| {
                    D::Error::custom(format!("{NODE_SHAPE_ERROR}: split is missing `panes`"))
                })?;
                Ok(LayoutNode::Split(SplitLayout {
                    split_direction,
                    panes,
                }))
            }
            None => {
                let cwd = raw.cwd.ok_or_else(|| {
                    D::Error::custom(format!(
                        "{NODE_SHAPE_ERROR}: needs either `split_direction` or `cwd`/`commands`"
                    ))
                })?;
                let commands = raw.commands.ok_or_else(|| {
                    D::Error::custom(format!("{NODE_SHAPE_ERROR}: missing `commands`"))
                })?;
                Ok(LayoutNode::Commands(CommandLayout { cwd, commands }))
            }
        }
    }
}

/// A top-level terminal view holding one layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTab {
    /// Tab title shown in the tab bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Custom tab color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TabColor>,

    /// Root of the tab's layout tree.
    pub layout: LayoutNode,
}

impl LaunchTab {
    /// An untitled, uncolored tab around a layout root.
    pub fn untitled(layout: LayoutNode) -> Self {
        Self {
            title: None,
            color: None,
            layout,
        }
    }
}

/// One window of a launch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchWindow {
    /// Tabs in this window, in display order.
    pub tabs: Vec<LaunchTab>,
}

/// A complete named launch configuration, one YAML document per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Display/search name; also the basis of the persisted file identifier.
    #[serde(default)]
    pub name: String,

    /// Windows in this configuration. The generator always emits exactly one.
    #[serde(default)]
    pub windows: Vec<LaunchWindow>,
}

impl LaunchConfig {
    /// Wrap a finished tab list in a single-window configuration.
    pub fn single_window(name: impl Into<String>, tabs: Vec<LaunchTab>) -> Self {
        Self {
            name: name.into(),
            windows: vec![LaunchWindow { tabs }],
        }
    }

    /// Render the configuration as a YAML document. Total for any valid tree.
    pub fn to_yaml(&self) -> Result<String, WizardError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Parse a YAML document and validate required structure.
    ///
    /// A document missing `name`, without at least one window, or holding a
    /// layout node with neither a `split_direction` nor a `cwd`/`commands`
    /// pair fails with [`WizardError::MalformedConfiguration`]; the caller
    /// must not activate or render it. Invalid YAML itself fails with
    /// [`WizardError::Parse`].
    pub fn from_yaml(contents: &str) -> Result<Self, WizardError> {
        let config: LaunchConfig = serde_yaml_ng::from_str(contents).map_err(|e| {
            let msg = e.to_string();
            if msg.contains(NODE_SHAPE_ERROR) {
                WizardError::MalformedConfiguration(msg)
            } else {
                WizardError::Parse(e)
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the document-level invariants.
    pub fn validate(&self) -> Result<(), WizardError> {
        if self.name.trim().is_empty() {
            return Err(WizardError::MalformedConfiguration(
                "missing `name`".to_string(),
            ));
        }
        if self.windows.is_empty() {
            return Err(WizardError::MalformedConfiguration(format!(
                "'{}' has no windows",
                self.name
            )));
        }
        Ok(())
    }
}
