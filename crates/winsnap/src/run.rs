//! Runtime wiring: config, window backend, dispatcher, and the key tap.

use std::path::Path;

use mac_winops::MacWinOps;
use permissions::check_permissions;
use tracing::{debug, info, warn};
use winsnap_engine::{Command, Dispatcher, Disposition, NoOp, Outcome};

use crate::{
    commands,
    error::{Error, Result},
};

/// Start the interceptor and block until the run loop exits.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load(config_path)?;
    let status = check_permissions();
    if !status.all_ok() {
        warn!(
            accessibility = status.accessibility_ok,
            input_monitoring = status.input_ok,
            "permissions missing"
        );
    }
    let ops = MacWinOps::new()?;
    let dispatcher = Dispatcher::new(&ops, cfg.keymap, cfg.tolerances);
    info!(
        bindings = dispatcher.keymap().bindings().len(),
        "winsnap listening"
    );
    mac_hotkey::run(|press| {
        dispatcher.handle_key(press.key, &press.modifiers) == Disposition::Consume
    })?;
    debug!("run loop finished");
    Ok(())
}

/// Run a single command against the focused window and report the outcome.
pub fn invoke(config_path: Option<&Path>, command: Command) -> Result<()> {
    let cfg = config::load(config_path)?;
    let ops = MacWinOps::new()?;
    let dispatcher = Dispatcher::new(&ops, cfg.keymap, cfg.tolerances);
    let outcome = dispatcher.invoke(command);
    println!("{}", commands::describe(command, &outcome));
    match outcome {
        Outcome::NoOp(NoOp::Unavailable(e)) => Err(Error::Engine(e)),
        _ => Ok(()),
    }
}

/// Print the command catalog with the effective bindings.
pub fn list_commands(config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load(config_path)?;
    print!("{}", commands::catalog(&cfg.keymap));
    Ok(())
}

/// Validate a config file and summarize it.
pub fn check(config_path: Option<&Path>) -> Result<()> {
    let cfg = config::load(config_path)?;
    match config::resolve_config_path(config_path) {
        Some(p) => println!("config ok: {}", p.display()),
        None => println!("config ok: no file, using built-in defaults"),
    }
    println!("bindings: {}", cfg.keymap.bindings().len());
    Ok(())
}

/// Print permission status; fails when anything is missing.
pub fn permissions() -> Result<()> {
    let status = check_permissions();
    println!("{status}");
    if status.all_ok() {
        Ok(())
    } else {
        Err(Error::PermissionsMissing)
    }
}
