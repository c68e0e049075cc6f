//! The placement state machine.
//!
//! Every function here is pure: it takes the current window frame and a
//! fresh [`DisplayDirectory`] and returns the next [`Placement`], or `None`
//! when the command has nothing to do from the current geometry.

use tracing::trace;

use crate::{
    Command, Direction, Tolerances,
    classify::{is_snapped_left, is_snapped_right},
    display::{Display, DisplayDirectory, DisplayId},
    geom::{self, Rect},
};

/// Where a command wants the focused window to go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Target frame in placement coordinates.
    pub frame: Rect,
    /// Target display, set only when the move crosses monitors.
    pub display: Option<DisplayId>,
}

impl Placement {
    /// A placement on the window's current display.
    pub fn local(frame: Rect) -> Self {
        Self {
            frame,
            display: None,
        }
    }

    /// A placement onto another display.
    pub fn onto(frame: Rect, display: &Display) -> Self {
        Self {
            frame,
            display: Some(display.id),
        }
    }
}

/// Plan any catalog command.
pub fn plan(
    command: Command,
    window: &Rect,
    dirs: &DisplayDirectory,
    tol: &Tolerances,
) -> Option<Placement> {
    if let Some(direction) = command.direction() {
        return snap(direction, window, dirs, tol);
    }
    match command {
        Command::MoveToPrevDisplay => move_to_display(window, dirs, -1),
        Command::MoveToNextDisplay => move_to_display(window, dirs, 1),
        _ => layout(command, window, dirs, tol),
    }
}

/// Progressive snapping in `direction`.
///
/// Left and right fall through onto the neighboring display once the window
/// is already snapped to that side. Up and down turn a half into the
/// matching quarter. Up on anything else maximizes; down on anything else
/// does nothing.
pub fn snap(
    direction: Direction,
    window: &Rect,
    dirs: &DisplayDirectory,
    tol: &Tolerances,
) -> Option<Placement> {
    let current = dirs.display_containing(window);
    let u = &current.usable;
    let left = is_snapped_left(window, u, tol);
    let right = is_snapped_right(window, u, tol);
    trace!(?direction, display = %current.id, left, right, "snap");

    match direction {
        Direction::Left if left => dirs
            .neighbor(current.id, -1)
            .map(|d| Placement::onto(geom::right_half(&d.usable), d)),
        Direction::Left => Some(Placement::local(geom::left_half(u))),
        Direction::Right if right => dirs
            .neighbor(current.id, 1)
            .map(|d| Placement::onto(geom::left_half(&d.usable), d)),
        Direction::Right => Some(Placement::local(geom::right_half(u))),
        Direction::Up if left => Some(Placement::local(geom::top_left_quarter(u))),
        Direction::Up if right => Some(Placement::local(geom::top_right_quarter(u))),
        Direction::Up => Some(Placement::local(geom::maximize(u))),
        Direction::Down if left => Some(Placement::local(geom::bottom_left_quarter(u))),
        Direction::Down if right => Some(Placement::local(geom::bottom_right_quarter(u))),
        Direction::Down => None,
    }
}

/// Move the window `steps` displays over, keeping its position and size as
/// fractions of the usable area.
pub fn move_to_display(window: &Rect, dirs: &DisplayDirectory, steps: isize) -> Option<Placement> {
    let src = dirs.display_containing(window);
    let dst = dirs.neighbor(src.id, steps)?;
    let su = &src.usable;
    if su.is_empty() {
        return None;
    }
    let du = &dst.usable;
    let fx = (window.x - su.x) / su.w;
    let fy = (window.y - su.y) / su.h;
    let fw = window.w / su.w;
    let fh = window.h / su.h;
    let frame = Rect {
        x: (du.x + fx * du.w).round(),
        y: (du.y + fy * du.h).round(),
        w: (fw * du.w).round(),
        h: (fh * du.h).round(),
    };
    Some(Placement::onto(frame, dst))
}

/// Fixed layouts on the window's current display. `None` for commands that
/// are not fixed layouts.
pub fn layout(
    command: Command,
    window: &Rect,
    dirs: &DisplayDirectory,
    tol: &Tolerances,
) -> Option<Placement> {
    let u = &dirs.display_containing(window).usable;
    let frame = match command {
        Command::Maximize => geom::maximize(u),
        Command::Center => geom::center(u, tol.center_scale),
        Command::LeftThird => geom::left_third(u),
        Command::CenterThird => geom::center_third(u),
        Command::RightThird => geom::right_third(u),
        Command::LeftTwoThirds => geom::left_two_thirds(u),
        Command::RightTwoThirds => geom::right_two_thirds(u),
        Command::SnapLeft
        | Command::SnapRight
        | Command::SnapUp
        | Command::SnapDown
        | Command::MoveToPrevDisplay
        | Command::MoveToNextDisplay => return None,
    };
    Some(Placement::local(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RawScreen;

    fn screen(id: u32, frame: Rect, primary: bool) -> RawScreen {
        RawScreen {
            id: DisplayId(id),
            frame,
            visible_frame: frame,
            primary,
        }
    }

    fn one() -> DisplayDirectory {
        DisplayDirectory::from_screens(vec![screen(
            1,
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            true,
        )])
        .expect("dirs")
    }

    fn two() -> DisplayDirectory {
        DisplayDirectory::from_screens(vec![
            screen(1, Rect::new(0.0, 0.0, 1920.0, 1080.0), true),
            screen(2, Rect::new(1920.0, 180.0, 1440.0, 900.0), false),
        ])
        .expect("dirs")
    }

    fn tol() -> Tolerances {
        Tolerances::default()
    }

    #[test]
    fn left_from_floating_then_through_to_neighbor() {
        let dirs = two();
        let floating = Rect::new(2200.0, 200.0, 500.0, 400.0);
        let p = snap(Direction::Left, &floating, &dirs, &tol()).expect("first");
        // Display 2 sits flush with the primary's top: 1080 - (180 + 900) = 0.
        assert_eq!(p, Placement::local(Rect::new(1920.0, 0.0, 720.0, 900.0)));

        let p = snap(Direction::Left, &p.frame, &dirs, &tol()).expect("second");
        assert_eq!(p.display, Some(DisplayId(1)));
        assert_eq!(p.frame, Rect::new(960.0, 0.0, 960.0, 1080.0));
    }

    #[test]
    fn left_at_leftmost_display_is_none() {
        let dirs = one();
        let left = Rect::new(0.0, 0.0, 960.0, 1080.0);
        assert!(snap(Direction::Left, &left, &dirs, &tol()).is_none());
    }

    #[test]
    fn right_from_left_half_goes_to_right_half() {
        let dirs = one();
        let left = Rect::new(0.0, 0.0, 960.0, 1080.0);
        let p = snap(Direction::Right, &left, &dirs, &tol()).expect("right");
        assert_eq!(p, Placement::local(Rect::new(960.0, 0.0, 960.0, 1080.0)));
    }

    #[test]
    fn right_half_falls_through_to_next_display() {
        let dirs = two();
        let right = Rect::new(960.0, 0.0, 960.0, 1080.0);
        let p = snap(Direction::Right, &right, &dirs, &tol()).expect("right");
        assert_eq!(p.display, Some(DisplayId(2)));
        assert_eq!(p.frame, Rect::new(1920.0, 0.0, 720.0, 900.0));
    }

    #[test]
    fn up_and_down_from_halves() {
        let dirs = one();
        let left = Rect::new(0.0, 0.0, 960.0, 1080.0);
        let right = Rect::new(960.0, 0.0, 960.0, 1080.0);
        let up = snap(Direction::Up, &left, &dirs, &tol()).expect("up");
        assert_eq!(up.frame, Rect::new(0.0, 0.0, 960.0, 540.0));
        let down = snap(Direction::Down, &right, &dirs, &tol()).expect("down");
        assert_eq!(down.frame, Rect::new(960.0, 540.0, 960.0, 540.0));

        // A quarter is not half-snapped, so up maximizes.
        let max = snap(Direction::Up, &up.frame, &dirs, &tol()).expect("max");
        assert_eq!(max.frame, Rect::new(0.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn down_without_half_is_none() {
        let dirs = one();
        let max = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert!(snap(Direction::Down, &max, &dirs, &tol()).is_none());
        let floating = Rect::new(300.0, 300.0, 500.0, 400.0);
        assert!(snap(Direction::Down, &floating, &dirs, &tol()).is_none());
    }

    #[test]
    fn move_is_proportional() {
        let dirs = two();
        let w = Rect::new(480.0, 270.0, 960.0, 540.0);
        let p = move_to_display(&w, &dirs, 1).expect("move");
        assert_eq!(p.display, Some(DisplayId(2)));
        assert_eq!(p.frame, Rect::new(2280.0, 225.0, 720.0, 450.0));

        let back = move_to_display(&p.frame, &dirs, -1).expect("back");
        assert_eq!(back.frame, w);
    }

    #[test]
    fn move_without_neighbor_is_none() {
        let dirs = one();
        let w = Rect::new(100.0, 100.0, 400.0, 300.0);
        assert!(move_to_display(&w, &dirs, 1).is_none());
        assert!(move_to_display(&w, &dirs, -1).is_none());
    }

    #[test]
    fn move_from_degenerate_display_is_none() {
        let dirs = DisplayDirectory::from_screens(vec![
            RawScreen {
                id: DisplayId(1),
                frame: Rect::new(0.0, 0.0, 1920.0, 1080.0),
                visible_frame: Rect::new(0.0, 0.0, 0.0, 0.0),
                primary: true,
            },
            screen(2, Rect::new(1920.0, 0.0, 1920.0, 1080.0), false),
        ])
        .expect("dirs");
        // No usable rect contains the center or overlaps, so the primary is
        // the source, and its usable area is empty.
        let w = Rect::new(-500.0, 100.0, 100.0, 100.0);
        assert!(move_to_display(&w, &dirs, 1).is_none());
    }

    #[test]
    fn layouts_target_current_display() {
        let dirs = two();
        let w = Rect::new(2000.0, 100.0, 300.0, 300.0);
        let p = layout(Command::LeftThird, &w, &dirs, &tol());
        assert_eq!(
            p,
            Some(Placement::local(Rect::new(1920.0, 0.0, 480.0, 900.0)))
        );
        let p = layout(Command::Center, &w, &dirs, &tol()).expect("center");
        assert_eq!(p.frame.w, (1440.0_f64 * 0.7).floor());
        let p = plan(Command::Maximize, &w, &dirs, &tol()).expect("max");
        assert_eq!(p.frame, Rect::new(1920.0, 0.0, 1440.0, 900.0));
    }

    #[test]
    fn layout_rejects_non_layout_commands() {
        let dirs = two();
        let w = Rect::new(100.0, 100.0, 300.0, 300.0);
        for command in [
            Command::SnapLeft,
            Command::SnapDown,
            Command::MoveToNextDisplay,
            Command::MoveToPrevDisplay,
        ] {
            assert_eq!(layout(command, &w, &dirs, &tol()), None, "{command}");
        }
        assert!(layout(Command::Maximize, &w, &dirs, &tol()).is_some());
    }
}
