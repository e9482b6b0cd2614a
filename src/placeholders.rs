//! Placeholder substitution for command text.
//!
//! Commands stored in groups may carry `WARP_WIZARD_<KEY>` placeholders. At
//! launch-config creation time each key is resolved to a value: the `<KEY>`
//! environment variable provides the default, and the user is prompted
//! (non-empty) either way before the command reaches the layout builder.

use crate::prompt;
use regex::Regex;
use std::sync::LazyLock;
use warp_wizard_config::Command;

/// Matches `WARP_WIZARD_<KEY>` placeholders. Compiled once at startup.
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"WARP_WIZARD_(\w+)")
        .expect("placeholder regex is a compile-time constant and must be valid")
});

/// Distinct placeholder keys in `text`, in order of first appearance.
pub fn placeholder_keys(text: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for caps in PLACEHOLDER_PATTERN.captures_iter(text) {
        let key = caps[1].to_string();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Replace every `WARP_WIZARD_<key>` occurrence with `value`.
pub fn fill(text: &str, key: &str, value: &str) -> String {
    text.replace(&format!("WARP_WIZARD_{key}"), value)
}

/// Resolve every placeholder in the selected commands, prompting for values.
///
/// The environment variable named after the key (without the prefix) seeds
/// the prompt default, so `WARP_WIZARD_APP_URL` defaults to `$APP_URL`.
/// Returns new commands; the input is consumed, not mutated in place across
/// shared state.
pub fn resolve_commands(commands: Vec<Command>) -> std::io::Result<Vec<Command>> {
    commands
        .into_iter()
        .map(|mut command| {
            for key in placeholder_keys(&command.text) {
                let default = std::env::var(&key).ok();
                let value =
                    prompt::required_text(&format!("Enter value for {key}:"), default.as_deref())?;
                command.text = fill(&command.text, &key, &value);
            }
            Ok(command)
        })
        .collect()
}
