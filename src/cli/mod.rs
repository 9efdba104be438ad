//! Command-line interface.

mod admin_flow;
mod prompts;
mod run;

use clap::{Parser, Subcommand};

use crate::settings::ReceiverSettings;

/// Multi-chain token creation wizard.
#[derive(Debug, Parser)]
#[command(name = "tokenlabs", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the token creation wizard (default).
    Run,
    /// Open the admin panel (receiver wallets and fees).
    Admin,
    /// Inspect the persisted receiver settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsAction {
    /// Print the current settings as JSON.
    Show,
    /// Print the settings file path.
    Path,
}

/// Dispatch a parsed CLI invocation.
pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run::run_wizard().await,
        Command::Admin => admin_flow::run_admin(),
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = ReceiverSettings::load();
                println!("{}", serde_json::to_string_pretty(&settings)?);
                Ok(())
            }
            SettingsAction::Path => {
                println!("{}", ReceiverSettings::default_path().display());
                Ok(())
            }
        },
    }
}
