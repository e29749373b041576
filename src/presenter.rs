// SPDX-License-Identifier: MPL-2.0
//! Turning a [`ToastRequest`] into a window on screen.
//!
//! [`prepare`] does every check and lookup that can fail, without touching the
//! display. [`present_toast`] adds the blocking window run on top of it.

use crate::app;
use crate::domain::toast::{Body, HexColor, Position, Title, ToastRequest, WindowSize};
use crate::error::Result;
use crate::ui::fonts::{self, FontCatalog};
use crate::ui::toast_icon::ToastIcon;
use iced::Font;
use std::time::Duration;

/// Everything needed to draw a toast, fully checked.
#[derive(Debug, Clone)]
pub struct PreparedToast {
    title: Title,
    body: Body,
    color: HexColor,
    duration: Duration,
    position: Position,
    size: WindowSize,
    icon: ToastIcon,
    font: Option<Font>,
}

impl PreparedToast {
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

    /// Time until the window closes.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Window size, derived from the message line count.
    #[must_use]
    pub fn size(&self) -> WindowSize {
        self.size
    }

    #[must_use]
    pub fn icon(&self) -> &ToastIcon {
        &self.icon
    }

    /// Font override for both labels, `None` for the toolkit default.
    #[must_use]
    pub fn font(&self) -> Option<Font> {
        self.font
    }
}

/// Validates `request` and resolves its font and icon.
///
/// Errors are reported in this order: title, color, message, position, font.
/// A missing or unreadable icon is not an error.
pub fn prepare(request: ToastRequest, catalog: &FontCatalog) -> Result<PreparedToast> {
    let validated = request.validate()?;
    let position: Position = validated.position().parse()?;
    let font = validated
        .font()
        .map(|name| catalog.resolve(name))
        .transpose()?
        .map(fonts::typeface);
    let icon = ToastIcon::resolve(validated.icon());
    let size = WindowSize::for_message(validated.body().as_str());

    tracing::debug!(
        %position,
        width = size.width,
        height = size.height,
        duration_secs = validated.duration().as_secs(),
        "prepared toast"
    );

    Ok(PreparedToast {
        title: validated.title().clone(),
        body: validated.body().clone(),
        color: validated.color(),
        duration: validated.duration(),
        position,
        size,
        icon,
        font,
    })
}

/// Shows a toast and blocks until it closes.
///
/// Nothing is drawn when validation fails. Requires a display.
pub fn present_toast(request: ToastRequest) -> Result<()> {
    let toast = prepare(request, &FontCatalog::system())?;
    app::run(toast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};

    fn catalog() -> FontCatalog {
        FontCatalog::from_families(["DejaVu Sans", "Noto Serif"])
    }

    #[test]
    fn default_request_prepares() {
        let toast = prepare(ToastRequest::default(), &catalog()).unwrap();
        assert_eq!(toast.title().as_str(), "Missing Title");
        assert_eq!(toast.position(), Position::BottomRight);
        assert_eq!(toast.duration(), Duration::from_secs(2));
        assert_eq!(toast.size(), WindowSize { width: 300, height: 115 });
        assert!(toast.icon().is_glyph());
        assert!(toast.font().is_none());
    }

    #[test]
    fn invalid_position_is_reported() {
        let err = prepare(ToastRequest::default().position("top"), &catalog()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn message_error_wins_over_position() {
        let request = ToastRequest::new("ok", "y".repeat(121)).position("top");
        let err = prepare(request, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MessageTooLong { .. })
        ));
    }

    #[test]
    fn position_error_wins_over_font() {
        let request = ToastRequest::default().position("top").font("Nope");
        let err = prepare(request, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn unknown_font_is_reported() {
        let err = prepare(ToastRequest::default().font("Nope"), &catalog()).unwrap_err();
        match err {
            Error::Validation(ValidationError::InvalidFont { available, .. }) => {
                assert_eq!(available, ["DejaVu Sans", "Noto Serif"]);
            }
            other => panic!("expected InvalidFont, got {other:?}"),
        }
    }

    #[test]
    fn known_font_becomes_typeface() {
        let toast = prepare(ToastRequest::default().font("noto serif"), &catalog()).unwrap();
        let font = toast.font().expect("font override");
        assert_eq!(font.family, iced::font::Family::Name("Noto Serif"));
    }

    #[test]
    fn nonexistent_icon_falls_back_to_glyph() {
        let request = ToastRequest::default().icon("/definitely/not/here.png");
        let toast = prepare(request, &catalog()).unwrap();
        assert!(toast.icon().is_glyph());
    }

    #[test]
    fn multi_line_message_grows_window() {
        let toast = prepare(ToastRequest::new("t", "a\nb\nc"), &catalog()).unwrap();
        assert_eq!(toast.size().height, 145);
    }
}
