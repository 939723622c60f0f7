//! `wgconf` entry point.
//!
//! Parses arguments, resolves the storage location, and dispatches to one
//! subcommand.  Command output goes to stdout; logs go to stderr so that
//! `wgconf show wg0 > wg0.conf` captures only the configuration.
//!
//! # Usage
//!
//! ```text
//! wgconf [--dir <PATH>] [--suffix <SUFFIX>] <COMMAND>
//!
//! Commands:
//!   list [--json]                  List stored configuration names
//!   show <NAME>                    Print a configuration
//!   create <NAME> [--file <PATH>]  Store a new configuration (stdin by default)
//!   save <NAME> [--file <PATH>]    Replace an existing configuration
//!   delete <NAME> [--if-exists]    Remove a configuration
//! ```

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wgconf_cli::cli::{Cli, Command};
use wgconf_cli::commands;
use wgconf_cli::config::CliConfig;

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig::resolve(cli.dir, cli.suffix)?;
    debug!(
        root = %config.storage_root.display(),
        suffix = %config.suffix,
        "resolved storage location"
    );
    let store = config.open_store()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List { json } => commands::list(&store, json, &mut out)?,
        Command::Show { name } => commands::show(&store, &name, &mut out)?,
        Command::Create { name, file } => {
            // Reject a bad name before blocking on stdin or creating the root.
            store.path_for(&name)?;
            let content = commands::read_content(file.as_deref(), io::stdin().lock())?;
            // The first configuration may arrive before the directory exists.
            config.ensure_storage_root()?;
            commands::create(&store, &name, content)
                .with_context(|| format!("could not create configuration {name:?}"))?;
        }
        Command::Save { name, file } => {
            store.path_for(&name)?;
            let content = commands::read_content(file.as_deref(), io::stdin().lock())?;
            commands::save(&store, &name, content)
                .with_context(|| format!("could not save configuration {name:?}"))?;
        }
        Command::Delete { name, if_exists } => {
            commands::delete(&store, &name, if_exists)
                .with_context(|| format!("could not delete configuration {name:?}"))?;
        }
    }

    Ok(())
}
