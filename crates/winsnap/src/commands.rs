//! Rendering of the command catalog and command outcomes.

use winsnap_engine::{Command, Keymap, NoOp, Outcome};

/// One line per command: name, bound chord (or `-`), description.
pub fn catalog(keymap: &Keymap) -> String {
    let mut out = String::new();
    for command in Command::ALL {
        let chord = keymap
            .chord_for(command)
            .map_or_else(|| "-".to_string(), ToString::to_string);
        out.push_str(&format!(
            "{:<22} {:<20} {}\n",
            command.name(),
            chord,
            command.description()
        ));
    }
    out
}

/// Human-readable summary of a single invocation.
pub fn describe(command: Command, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Applied(p) => match p.display {
            Some(id) => format!("{command}: {} on {id}", p.frame),
            None => format!("{command}: {}", p.frame),
        },
        Outcome::NoOp(NoOp::Unavailable(e)) => format!("{command}: failed: {e}"),
        Outcome::NoOp(reason) => format!("{command}: unchanged ({reason})"),
    }
}
