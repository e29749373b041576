// SPDX-License-Identifier: MPL-2.0
//! Window settings for the toast.
//!
//! The window is positioned with `Position::SpecificWith`, which receives the
//! window and monitor sizes (logical pixels) when the window is created. Both
//! are truncated to whole pixels before the placement formula runs.
//!
//! Wayland compositors do not let clients position their windows, so there
//! the requested placement is ignored and the compositor picks the spot.

use crate::domain::toast::{Geometry, Position, ScreenSize, WindowSize};
use iced::{window, Point, Size};

/// Borderless, fixed-size, always-on-top window placed at `position`.
pub fn window_settings(size: WindowSize, position: Position) -> window::Settings {
    window::Settings {
        size: Size::new(size.width as f32, size.height as f32),
        position: window::Position::SpecificWith(anchor(position)),
        resizable: false,
        decorations: false,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Top-left corner of a `window` sized toast on a `monitor` sized screen.
#[must_use]
pub fn placement(position: Position, window: Size, monitor: Size) -> Point {
    let screen = ScreenSize::new(monitor.width as u32, monitor.height as u32);
    let size = WindowSize {
        width: window.width as u32,
        height: window.height as u32,
    };
    let geometry = Geometry::new(screen, size, position);
    Point::new(geometry.x as f32, geometry.y as f32)
}

/// `SpecificWith` takes a plain function pointer, so each position gets its
/// own non-capturing closure.
fn anchor(position: Position) -> fn(Size, Size) -> Point {
    match position {
        Position::Center => |window, monitor| placement(Position::Center, window, monitor),
        Position::BottomLeft => |window, monitor| placement(Position::BottomLeft, window, monitor),
        Position::BottomRight => {
            |window, monitor| placement(Position::BottomRight, window, monitor)
        }
        Position::BottomCenter => {
            |window, monitor| placement(Position::BottomCenter, window, monitor)
        }
        Position::UpperCenter => {
            |window, monitor| placement(Position::UpperCenter, window, monitor)
        }
        Position::UpperLeft => |window, monitor| placement(Position::UpperLeft, window, monitor),
        Position::UpperRight => {
            |window, monitor| placement(Position::UpperRight, window, monitor)
        }
    }
}
