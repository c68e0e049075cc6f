use std::{fmt, str::FromStr};

use crate::Error;

/// Direction for progressive snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the left edge, then the display to the left.
    Left,
    /// Toward the right edge, then the display to the right.
    Right,
    /// Toward the top: quarters from a half, otherwise maximize.
    Up,
    /// Toward the bottom: quarters from a half.
    Down,
}

/// The fixed command catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// Progressive snap to the left.
    SnapLeft,
    /// Progressive snap to the right.
    SnapRight,
    /// Progressive snap upward.
    SnapUp,
    /// Progressive snap downward.
    SnapDown,
    /// Fill the usable area.
    Maximize,
    /// Center at a fixed fraction of the usable area.
    Center,
    /// Remap proportionally onto the display to the left.
    MoveToPrevDisplay,
    /// Remap proportionally onto the display to the right.
    MoveToNextDisplay,
    /// Left third.
    LeftThird,
    /// Middle third.
    CenterThird,
    /// Right third.
    RightThird,
    /// Left two thirds.
    LeftTwoThirds,
    /// Right two thirds.
    RightTwoThirds,
}

impl Command {
    /// Every command, in catalog order.
    pub const ALL: [Self; 13] = [
        Self::SnapLeft,
        Self::SnapRight,
        Self::SnapUp,
        Self::SnapDown,
        Self::Maximize,
        Self::Center,
        Self::MoveToPrevDisplay,
        Self::MoveToNextDisplay,
        Self::LeftThird,
        Self::CenterThird,
        Self::RightThird,
        Self::LeftTwoThirds,
        Self::RightTwoThirds,
    ];

    /// Stable kebab-case name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::SnapLeft => "snap-left",
            Self::SnapRight => "snap-right",
            Self::SnapUp => "snap-up",
            Self::SnapDown => "snap-down",
            Self::Maximize => "maximize",
            Self::Center => "center",
            Self::MoveToPrevDisplay => "move-to-prev-display",
            Self::MoveToNextDisplay => "move-to-next-display",
            Self::LeftThird => "left-third",
            Self::CenterThird => "center-third",
            Self::RightThird => "right-third",
            Self::LeftTwoThirds => "left-two-thirds",
            Self::RightTwoThirds => "right-two-thirds",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::SnapLeft => "Left half; from the left half, onto the display to the left",
            Self::SnapRight => "Right half; from the right half, onto the display to the right",
            Self::SnapUp => "Top quarter from a half, otherwise maximize",
            Self::SnapDown => "Bottom quarter from a half",
            Self::Maximize => "Fill the usable area",
            Self::Center => "Center at a fixed fraction of the usable area",
            Self::MoveToPrevDisplay => "Same relative frame on the display to the left",
            Self::MoveToNextDisplay => "Same relative frame on the display to the right",
            Self::LeftThird => "Left third",
            Self::CenterThird => "Middle third",
            Self::RightThird => "Right third",
            Self::LeftTwoThirds => "Left two thirds",
            Self::RightTwoThirds => "Right two thirds",
        }
    }

    /// Look up a command by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The snap direction, for the four progressive commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::SnapLeft => Some(Direction::Left),
            Self::SnapRight => Some(Direction::Right),
            Self::SnapUp => Some(Direction::Up),
            Self::SnapDown => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_roundtrip_and_are_unique() {
        let mut seen = HashSet::new();
        for c in Command::ALL {
            assert!(seen.insert(c.name()), "duplicate {}", c.name());
            assert_eq!(Command::from_name(c.name()), Some(c));
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn from_str_reports_unknown() {
        assert_eq!("center".parse::<Command>(), Ok(Command::Center));
        assert_eq!(
            "centre".parse::<Command>(),
            Err(Error::UnknownCommand("centre".into()))
        );
    }

    #[test]
    fn only_snaps_have_directions() {
        let with_dir: Vec<Command> = Command::ALL
            .into_iter()
            .filter(|c| c.direction().is_some())
            .collect();
        assert_eq!(
            with_dir,
            vec![
                Command::SnapLeft,
                Command::SnapRight,
                Command::SnapUp,
                Command::SnapDown
            ]
        );
    }
}
