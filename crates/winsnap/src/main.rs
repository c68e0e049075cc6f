//! Binary entrypoint for winsnap.
use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use logging::{self as logshared};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*};
use winsnap_engine::Command;

/// Catalog and outcome rendering.
mod commands;
mod error;
/// Runtime wiring for each subcommand.
mod run;

#[derive(Parser, Debug)]
#[command(
    name = "winsnap",
    about = "Keyboard-driven window snapping for macOS",
    version
)]
/// Command-line interface for the `winsnap` binary.
struct Cli {
    /// Optional subcommand; defaults to `run`.
    #[command(subcommand)]
    command: Option<Cmd>,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,

    /// Optional path to the config file (defaults to ~/.winsnap/config.ron)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Cmd {
    /// Intercept global shortcuts and snap the focused window.
    Run,
    /// List the command catalog with the effective bindings.
    Commands,
    /// Run one command against the focused window, then exit.
    Invoke {
        /// Command name, e.g. snap-left or left-third.
        #[arg(value_name = "COMMAND")]
        command: Command,
    },
    /// Load and validate the configuration then exit.
    Check {
        /// Path to configuration file to check (defaults to --config, then ~/.winsnap/config.ron)
        path: Option<PathBuf>,
    },
    /// Report Accessibility and Input Monitoring status.
    Permissions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = logshared::env_filter_from_spec(&cli.log.spec());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let config = cli.config.as_deref();
    let result = match cli.command.unwrap_or(Cmd::Run) {
        Cmd::Run => run::run(config),
        Cmd::Commands => run::list_commands(config),
        Cmd::Invoke { command } => run::invoke(config, command),
        Cmd::Check { path } => run::check(path.as_deref().or(config)),
        Cmd::Permissions => run::permissions(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "winsnap failed");
            eprintln!("winsnap: {e}");
            ExitCode::FAILURE
        }
    }
}
