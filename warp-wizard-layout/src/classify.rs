//! Stable partition of a command selection by run profile.

use warp_wizard_config::Command;

/// Split a command list into (one-off, long-running) subsets.
///
/// The partition is stable (relative order is preserved within each output)
/// and exhaustive (every input command lands in exactly one output). The
/// input is not mutated.
pub fn classify(commands: &[Command]) -> (Vec<Command>, Vec<Command>) {
    let mut one_off = Vec::new();
    let mut long_running = Vec::new();
    for command in commands {
        if command.long_running {
            long_running.push(command.clone());
        } else {
            one_off.push(command.clone());
        }
    }
    (one_off, long_running)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_two_empty_outputs() {
        let (one_off, long_running) = classify(&[]);
        assert!(one_off.is_empty());
        assert!(long_running.is_empty());
    }

    #[test]
    fn partition_is_stable_and_exhaustive() {
        let commands = vec![
            Command::one_off("git pull"),
            Command::long_running("npm start", Some("dev")),
            Command::one_off("npm install"),
            Command::long_running("npm run worker", None),
            Command::one_off("clear"),
        ];

        let (one_off, long_running) = classify(&commands);

        assert_eq!(one_off.len() + long_running.len(), commands.len());

        let expected_one_off: Vec<_> = commands
            .iter()
            .filter(|c| !c.long_running)
            .cloned()
            .collect();
        let expected_long: Vec<_> = commands
            .iter()
            .filter(|c| c.long_running)
            .cloned()
            .collect();
        assert_eq!(one_off, expected_one_off);
        assert_eq!(long_running, expected_long);
    }

    #[test]
    fn all_long_running_leaves_one_off_empty() {
        let commands = vec![
            Command::long_running("a", None),
            Command::long_running("b", None),
        ];
        let (one_off, long_running) = classify(&commands);
        assert!(one_off.is_empty());
        assert_eq!(long_running.len(), 2);
    }
}
