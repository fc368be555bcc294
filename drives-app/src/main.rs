// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use drive_panels::host::HeadlessHost;
use drive_panels::state::panels::{FILE_BROWSER_FACTORY, FILE_BROWSER_PLUGIN_ID, PANEL_CAPTION};
use drive_panels::{Config, DrivesApp, Outcome, identifier, logging};
use drives_contracts::UiNode;

#[derive(Debug, Parser)]
#[command(name = "drive-panels")]
#[command(about = "Activate drive panels against a headless host and inspect them")]
struct Cli {
    /// TOML configuration file; built-in demo drives when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Skip the restoration collaborator.
    #[arg(long)]
    no_restorer: bool,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List registered drives as JSON.
    List,
    /// Show the panels attached to the shell.
    Panels,
    /// Right-click a panel tab and run the remove command.
    Remove { identifier: String },
    /// Dispose every drive as on host shutdown.
    Shutdown,
    /// Panel identifier for a drive name.
    Encode { name: String },
    /// Drive name for a panel identifier.
    Decode { identifier: String },
}

fn print_outcome(outcome: &Outcome) {
    for id in &outcome.opened {
        println!("opened {id}");
    }
    for id in &outcome.closed {
        println!("closed {id}");
    }
    if outcome.is_empty() {
        println!("no panel changed");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(CliCommand::Encode { name }) => {
            println!("{}", identifier::encode(name));
            return Ok(());
        }
        Some(CliCommand::Decode { identifier: id }) => {
            println!("{}", identifier::decode(id));
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config);

    let host = Arc::new(HeadlessHost::new().with_toolbar(
        FILE_BROWSER_FACTORY,
        FILE_BROWSER_PLUGIN_ID,
        config.toolbar.clone(),
    ));
    let mut app = DrivesApp::activate(host.services(!cli.no_restorer), &config);
    for rejected in app.rejected() {
        eprintln!("rejected: {rejected}");
    }

    match cli.command {
        None | Some(CliCommand::Panels) => {
            let panels = serde_json::to_string_pretty(&host.attached_panels())
                .context("failed to serialize panels")?;
            println!("{panels}");
        }
        Some(CliCommand::List) => {
            println!(
                "{}",
                app.list_drives_json()
                    .context("failed to serialize drives")?
            );
        }
        Some(CliCommand::Remove { identifier }) => {
            host.set_context_path(vec![UiNode {
                title: PANEL_CAPTION.to_string(),
                data_id: Some(identifier),
            }]);
            if let Some(outcome) =
                app.execute(drive_panels::message::command_ids::REMOVE_DRIVE_BROWSER)
            {
                print_outcome(&outcome);
            }
        }
        Some(CliCommand::Shutdown) => print_outcome(&app.shutdown()),
        Some(CliCommand::Encode { .. } | CliCommand::Decode { .. }) => {}
    }

    Ok(())
}
