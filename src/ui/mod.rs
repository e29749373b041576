// SPDX-License-Identifier: MPL-2.0
//! UI building blocks for the toast window.
//!
//! `fonts` and `toast_icon` are the host capability lookups (font families,
//! image decoding); `toast` renders the panel from a prepared toast.

pub mod design_tokens;
pub mod fonts;
pub mod toast;
pub mod toast_icon;
