// SPDX-License-Identifier: MPL-2.0
//! Toast domain: request validation and window geometry.
//!
//! Nothing in here touches the display, so all of it runs headless.

pub mod geometry;
pub mod newtypes;
pub mod position;
pub mod request;

pub use geometry::{compute_geometry, line_count, Geometry, ScreenSize, WindowSize};
pub use newtypes::{toast_bounds, Body, HexColor, Title};
pub use position::Position;
pub use request::{ToastRequest, ValidatedToast};
