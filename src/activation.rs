//! Asking Warp to activate a named launch configuration.
//!
//! On macOS this drives Warp through an `osascript` JavaScript-for-Automation
//! snippet: activate the app, open the launch-config palette
//! (cmd+ctrl+L), type the configuration name, press return. Other platforms
//! get a log line and a hint, since Warp exposes no comparable automation
//! surface there.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Warp scans its launch-configurations directory lazily; a freshly written
/// file takes roughly this long to appear in the palette.
pub const WARP_REGISTRATION_DELAY_SECS: u64 = 15;

/// Escape a string for embedding in a single-quoted JXA string literal.
#[cfg(any(target_os = "macos", test))]
fn jxa_string_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('\'');
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped.push('\'');
    escaped
}

#[cfg(any(target_os = "macos", test))]
fn activation_script(config_name: &str) -> String {
    format!(
        "const se = Application('System Events');\n\
         Application('Warp').activate();\n\
         se.keystroke('l', {{ using: ['command down', 'control down'] }});\n\
         se.keystroke({name});\n\
         se.keyCode(36);",
        name = jxa_string_literal(config_name)
    )
}

/// Activate the named launch configuration in Warp.
#[cfg(target_os = "macos")]
pub fn activate(config_name: &str) -> anyhow::Result<()> {
    let script = activation_script(config_name);
    log::info!("Activating launch config '{config_name}' via osascript");

    let status = std::process::Command::new("osascript")
        .args(["-l", "JavaScript", "-e", &script])
        .status()?;
    if !status.success() {
        anyhow::bail!("osascript exited with {status} while activating '{config_name}'");
    }
    Ok(())
}

/// Activate the named launch configuration in Warp.
#[cfg(not(target_os = "macos"))]
pub fn activate(config_name: &str) -> anyhow::Result<()> {
    log::warn!("Warp automation is only available on macOS");
    println!(
        "Warp automation is only available on macOS. \
         Open Warp and pick '{config_name}' from the launch configuration palette."
    );
    Ok(())
}

/// Block while Warp registers a freshly written configuration, printing a
/// dot per second so the wait is visible.
pub fn wait_for_registration() -> io::Result<()> {
    print!("Waiting for Warp");
    io::stdout().flush()?;
    for _ in 0..WARP_REGISTRATION_DELAY_SECS {
        thread::sleep(Duration::from_secs(1));
        print!(".");
        io::stdout().flush()?;
    }
    println!(" done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_quotes_and_backslashes() {
        assert_eq!(jxa_string_literal("plain"), "'plain'");
        assert_eq!(jxa_string_literal("it's"), "'it\\'s'");
        assert_eq!(jxa_string_literal("a\\b"), "'a\\\\b'");
        assert_eq!(jxa_string_literal("two\nlines"), "'two\\nlines'");
    }

    #[test]
    fn script_types_the_config_name() {
        let script = activation_script("My Project");
        assert!(script.contains("Application('Warp').activate()"));
        assert!(script.contains("se.keystroke('My Project')"));
        assert!(script.contains("se.keyCode(36)"));
    }
}
