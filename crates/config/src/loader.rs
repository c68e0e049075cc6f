use std::{collections::BTreeMap, fs, path::Path};

use mac_keycode::Chord;
use serde::Deserialize;
use tracing::{debug, info};
use winsnap_engine::{Command, Keymap, Tolerances};

use crate::{Config, Error, resolve_config_path};

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    /// Tolerance overrides.
    tolerances: Tolerances,
    /// Command name to chord spec. Empty spec unbinds.
    bindings: BTreeMap<String, String>,
}

/// Load the config at `explicit`, or the default path when it exists, or
/// fall back to built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
    match resolve_config_path(explicit) {
        Some(path) => load_from_path(&path),
        None => {
            debug!("no config file; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load and validate a config file.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let cfg = parse(&text).map_err(|e| e.with_path(path))?;
    info!(path = %path.display(), bindings = cfg.keymap.bindings().len(), "loaded config");
    Ok(cfg)
}

/// Parse and validate RON text.
pub(crate) fn parse(text: &str) -> Result<Config, Error> {
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    let raw: RawConfig = ron::from_str(text).map_err(|e| Error::Parse {
        path: None,
        message: e.to_string(),
    })?;
    raw.tolerances
        .validate()
        .map_err(|e| Error::validation(e.to_string()))?;
    let keymap = apply_bindings(&raw.bindings)?;
    Ok(Config {
        tolerances: raw.tolerances,
        keymap,
    })
}

/// Apply overrides on top of the default keymap.
///
/// Every overridden command is unbound first, so two commands can swap
/// chords within one file.
fn apply_bindings(bindings: &BTreeMap<String, String>) -> Result<Keymap, Error> {
    let mut parsed = Vec::with_capacity(bindings.len());
    for (name, spec) in bindings {
        let command = Command::from_name(name).ok_or_else(|| {
            Error::validation(format!("unknown command '{name}' in bindings"))
        })?;
        let chord = if spec.trim().is_empty() {
            None
        } else {
            let chord = Chord::parse(spec).ok_or_else(|| {
                Error::validation(format!("invalid chord '{spec}' for {command}"))
            })?;
            Some(chord)
        };
        parsed.push((command, chord));
    }

    let mut keymap = Keymap::default();
    for (command, _) in &parsed {
        keymap.unbind(*command);
    }
    for (command, chord) in parsed {
        if let Some(chord) = chord {
            keymap
                .bind(command, chord)
                .map_err(|e| Error::validation(e.to_string()))?;
        }
    }
    Ok(keymap)
}
