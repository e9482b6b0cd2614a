//! Layout tree builder: classified commands in, launch tabs out.
//!
//! The arrangement for long-running commands in panes mode is a fixed
//! two-row grid, not a general bin-packer: commands are chunked into tabs of
//! at most `max_panes_per_tab`, and within a tab into vertical pairs laid out
//! as columns of a horizontal split. Split orientations alternate by exactly
//! one level; the builder never emits two nested same-orientation splits.

use crate::chunk::chunk;
use warp_wizard_config::{Command, CommandSpec, LaunchTab, LayoutNode, SplitDirection, WizardError};

/// How long-running commands receive their screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One tab per long-running command.
    Tabs,
    /// Long-running commands share tabs, arranged in split panes.
    Panes,
}

/// Arrange classified commands into the tab list of a launch configuration.
///
/// - One-off commands, if any, share a single untitled leading tab and run in
///   selection order.
/// - In [`LayoutMode::Tabs`] (or with `max_panes_per_tab == 1`), each
///   long-running command gets its own tab titled with the command's title.
/// - In [`LayoutMode::Panes`], long-running commands are chunked into tabs of
///   at most `max_panes_per_tab` and arranged as vertical pairs inside a
///   horizontal split.
///
/// Both inputs and `cwd` are borrowed and never mutated; the result is a
/// deterministic function of the arguments. Empty inputs produce an empty
/// tab list.
///
/// `max_panes_per_tab == 0` should have been rejected by upstream validation
/// and fails with [`WizardError::InvalidArgument`].
pub fn build(
    one_off: &[Command],
    long_running: &[Command],
    cwd: &str,
    mode: LayoutMode,
    max_panes_per_tab: usize,
) -> Result<Vec<LaunchTab>, WizardError> {
    if max_panes_per_tab == 0 {
        return Err(WizardError::InvalidArgument(
            "max panes per tab must be at least 1".to_string(),
        ));
    }

    let mut tabs = Vec::new();

    if !one_off.is_empty() {
        tabs.push(LaunchTab::untitled(LayoutNode::commands(
            cwd,
            one_off.iter().map(command_spec).collect(),
        )));
    }

    if long_running.is_empty() {
        return Ok(tabs);
    }

    if mode == LayoutMode::Tabs || max_panes_per_tab == 1 {
        tabs.extend(long_running.iter().map(|command| LaunchTab {
            title: command.title.clone(),
            color: None,
            layout: single_pane(command, cwd),
        }));
        log::debug!(
            "Built {} single-command tabs in tabs mode",
            long_running.len()
        );
        return Ok(tabs);
    }

    for group in chunk(long_running, max_panes_per_tab)? {
        let columns: Vec<LayoutNode> = chunk(&group, 2)?
            .into_iter()
            .map(|pair| {
                // A leftover group of one stays a single-child vertical
                // split; it does not collapse to a bare command layout.
                LayoutNode::split(
                    SplitDirection::Vertical,
                    pair.iter().map(|command| single_pane(command, cwd)).collect(),
                )
            })
            .collect();

        let root = if columns.len() == 1 {
            // No horizontal wrapper around a lone column.
            columns
                .into_iter()
                .next()
                .expect("chunking a non-empty group yields at least one column")
        } else {
            LayoutNode::split(SplitDirection::Horizontal, columns)
        };
        tabs.push(LaunchTab::untitled(root));
    }

    log::debug!(
        "Built {} tabs for {} long-running commands (max {} panes/tab)",
        tabs.len(),
        long_running.len(),
        max_panes_per_tab
    );
    Ok(tabs)
}

fn command_spec(command: &Command) -> CommandSpec {
    CommandSpec {
        exec: command.text.clone(),
    }
}

fn single_pane(command: &Command, cwd: &str) -> LayoutNode {
    LayoutNode::commands(cwd, vec![command_spec(command)])
}
