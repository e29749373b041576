// SPDX-License-Identifier: MPL-2.0
//! Caller-facing toast request and its validated form.

use super::newtypes::{Body, HexColor, Title};
use crate::error::ValidationError;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "Missing Title";
pub const DEFAULT_MESSAGE: &str = "Missing Message";
pub const DEFAULT_DURATION_SECS: u64 = 2;
pub const DEFAULT_COLOR: &str = "#424242";
pub const DEFAULT_POSITION: &str = "bottom-right";

/// Unchecked toast parameters, as supplied by a caller.
///
/// Nothing here is validated until [`ToastRequest::validate`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub title: String,
    pub message: String,
    pub duration_secs: u64,
    /// Background color in `#RRGGBB` notation.
    pub color: String,
    /// Position name, see [`super::Position`].
    pub position: String,
    pub icon: Option<PathBuf>,
    /// Font family name for both labels.
    pub font: Option<String>,
}

impl Default for ToastRequest {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            duration_secs: DEFAULT_DURATION_SECS,
            color: DEFAULT_COLOR.to_string(),
            position: DEFAULT_POSITION.to_string(),
            icon: None,
            font: None,
        }
    }
}

impl ToastRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn duration_secs(mut self, secs: u64) -> Self {
        self.duration_secs = secs;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon = Some(path.into());
        self
    }

    #[must_use]
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = Some(family.into());
        self
    }

    /// Checks title, color and message, in that order.
    ///
    /// Position and font are carried through unchecked; they are resolved
    /// when the window is laid out.
    pub fn validate(self) -> Result<ValidatedToast, ValidationError> {
        let title = Title::new(self.title)?;
        let color: HexColor = self.color.parse()?;
        let body = Body::new(self.message)?;

        Ok(ValidatedToast {
            title,
            body,
            color,
            duration: Duration::from_secs(self.duration_secs),
            position: self.position,
            icon: self.icon,
            font: self.font,
        })
    }
}

/// A request whose title, color and message passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedToast {
    title: Title,
    body: Body,
    color: HexColor,
    duration: Duration,
    position: String,
    icon: Option<PathBuf>,
    font: Option<String>,
}

impl ValidatedToast {
    #[must_use]
    pub fn title(&self) -> &Title {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn color(&self) -> HexColor {
        self.color
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw position name, not yet checked.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Requested font family, not yet resolved.
    #[must_use]
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }
}
