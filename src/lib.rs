// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient desktop toast notifications with the Iced GUI
//! framework.
//!
//! A toast is a small borderless, always-on-top window with a title, a
//! message and an icon. It closes by itself once its duration elapses.
//!
//! ```no_run
//! use iced_toast::{present_toast, ToastRequest};
//!
//! let request = ToastRequest::new("Backup", "Finished in 42 s")
//!     .position("upper-right")
//!     .color("#2e7d32");
//! present_toast(request).expect("toast failed");
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod icon;
pub mod logging;
pub mod presenter;
pub mod ui;

pub use domain::toast::{compute_geometry, Geometry, Position, ToastRequest};
pub use error::{Error, Result, ValidationError};
pub use presenter::{prepare, present_toast, PreparedToast};
pub use ui::fonts::FontCatalog;
