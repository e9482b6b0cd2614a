use anyhow::Result;
use std::process::ExitCode;
use warp_wizard::cli::{self, WizardAction};
use warp_wizard::wizard::{LaunchWizard, groups};
use warp_wizard_config::WizardPaths;

fn main() -> ExitCode {
    // Process CLI arguments first (before logging init for cleaner output)
    let action = cli::process_cli();

    // Route all log::info!() etc. from the store crates into the debug log
    // file so prompts on stdout stay clean.
    warp_wizard::debug::init_log_bridge();
    log::info!("Starting warp-wizard {}", warp_wizard::VERSION);

    run(action).map_or_else(
        |e| {
            eprintln!("warp-wizard: error: {e:#}");
            ExitCode::FAILURE
        },
        |()| ExitCode::SUCCESS,
    )
}

fn run(action: WizardAction) -> Result<()> {
    let paths = WizardPaths::resolve();
    paths.ensure()?;

    let dir = std::env::current_dir()?;
    let wizard = LaunchWizard::new(&paths, dir);

    match action {
        WizardAction::Launch => wizard.run_default(),
        WizardAction::Edit => wizard.edit(),
        WizardAction::Unlink => wizard.unlink(),
        WizardAction::Link => wizard.link(),
        WizardAction::CreateGroup => groups::create_group(&paths),
        WizardAction::EditGroups => groups::edit_groups(&paths),
    }
}
