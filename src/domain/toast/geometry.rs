// SPDX-License-Identifier: MPL-2.0
//! Toast window geometry.
//!
//! All values are integer logical pixels. Halving uses floor division, so a
//! centered window on an odd leftover span sits half a pixel up and left.
//! Coordinates are not clamped: a screen smaller than the window yields
//! negative offsets.

use super::position::Position;
use crate::error::ValidationError;

/// Fixed toast width.
pub const WINDOW_WIDTH: u32 = 300;
/// Height added per message line.
pub const LINE_HEIGHT: u32 = 15;
/// Height reserved for the icon, title and padding.
pub const BASE_HEIGHT: u32 = 100;
/// Lower bound on the window height.
pub const MIN_HEIGHT: u32 = 100;
/// Gap between the window and the left, right and top screen edges.
pub const EDGE_MARGIN: i32 = 10;
/// Gap between the window and the bottom screen edge.
pub const BOTTOM_MARGIN: i32 = 30;

/// Size of the screen the toast is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Size of the toast window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    /// Sizes the window to fit `message`.
    #[must_use]
    pub fn for_message(message: &str) -> Self {
        let lines = u32::try_from(line_count(message)).unwrap_or(u32::MAX);
        let height = lines
            .saturating_mul(LINE_HEIGHT)
            .saturating_add(BASE_HEIGHT)
            .max(MIN_HEIGHT);
        Self {
            width: WINDOW_WIDTH,
            height,
        }
    }
}

/// Window rectangle: size plus top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Geometry {
    /// Places a window of `size` on `screen` at `position`.
    #[must_use]
    pub fn new(screen: ScreenSize, size: WindowSize, position: Position) -> Self {
        let (x, y) = origin(screen, size, position);
        Self {
            width: size.width,
            height: size.height,
            x,
            y,
        }
    }

    /// Returns `(width, height, x, y)`.
    #[must_use]
    pub fn as_tuple(self) -> (u32, u32, i32, i32) {
        (self.width, self.height, self.x, self.y)
    }
}

/// Number of `\n`-separated segments in `message`. Never zero.
#[must_use]
pub fn line_count(message: &str) -> usize {
    message.split('\n').count()
}

/// Computes the toast rectangle for a named position.
///
/// The position name is checked here rather than during request validation,
/// so it is reported after title, color and message problems.
pub fn compute_geometry(
    screen_width: u32,
    screen_height: u32,
    message: &str,
    position: &str,
) -> Result<Geometry, ValidationError> {
    let position: Position = position.parse()?;
    Ok(Geometry::new(
        ScreenSize::new(screen_width, screen_height),
        WindowSize::for_message(message),
        position,
    ))
}

/// Top-left corner of a window of `size` placed at `position`.
#[must_use]
pub fn origin(screen: ScreenSize, size: WindowSize, position: Position) -> (i32, i32) {
    let sw = to_i32(screen.width);
    let sh = to_i32(screen.height);
    let w = to_i32(size.width);
    let h = to_i32(size.height);

    let centered_x = (sw - w).div_euclid(2);
    let left = EDGE_MARGIN;
    let right = sw - w - EDGE_MARGIN;
    let top = EDGE_MARGIN;
    let bottom = sh - h - BOTTOM_MARGIN;

    match position {
        Position::Center => (centered_x, (sh - h).div_euclid(2)),
        Position::BottomLeft => (left, bottom),
        Position::BottomRight => (right, bottom),
        Position::BottomCenter => (centered_x, bottom),
        Position::UpperCenter => (centered_x, top),
        Position::UpperLeft => (left, top),
        Position::UpperRight => (right, top),
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: ScreenSize = ScreenSize::new(1920, 1080);

    #[test]
    fn single_line_bottom_right_on_full_hd() {
        // one line still adds its line height: 1 * 15 + 100
        let geometry = compute_geometry(1920, 1080, "hello", "bottom-right").unwrap();
        assert_eq!(geometry.as_tuple(), (300, 115, 1610, 935));
    }

    #[test]
    fn three_lines_centered_truncates_half_pixel() {
        let geometry = compute_geometry(1920, 1080, "a\nb\nc", "center").unwrap();
        assert_eq!(geometry.height, 145);
        assert_eq!(geometry.x, 810);
        assert_eq!(geometry.y, 467);
    }

    #[test]
    fn height_grows_by_line_height_per_line() {
        assert_eq!(WindowSize::for_message("").height, 115);
        assert_eq!(WindowSize::for_message("one").height, 115);
        assert_eq!(WindowSize::for_message("one\ntwo").height, 130);
        assert_eq!(WindowSize::for_message("\n\n\n").height, 160);
    }

    #[test]
    fn width_is_fixed() {
        assert_eq!(WindowSize::for_message(&"w".repeat(120)).width, WINDOW_WIDTH);
    }

    #[test]
    fn line_count_counts_segments() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn every_position_on_full_hd() {
        let size = WindowSize::for_message("x");
        let expect = [
            (Position::Center, (810, 482)),
            (Position::BottomLeft, (10, 935)),
            (Position::BottomRight, (1610, 935)),
            (Position::BottomCenter, (810, 935)),
            (Position::UpperCenter, (810, 10)),
            (Position::UpperLeft, (10, 10)),
            (Position::UpperRight, (1610, 10)),
        ];
        for (position, corner) in expect {
            assert_eq!(origin(FULL_HD, size, position), corner, "{position}");
        }
    }

    #[test]
    fn unknown_position_is_rejected() {
        assert!(matches!(
            compute_geometry(1920, 1080, "x", "top"),
            Err(ValidationError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn tiny_screen_yields_negative_offsets() {
        let geometry = Geometry::new(
            ScreenSize::new(200, 90),
            WindowSize::for_message("x"),
            Position::Center,
        );
        // (200 - 300) / 2 and (90 - 115) / 2, floored
        assert_eq!((geometry.x, geometry.y), (-50, -13));
    }
}
