// SPDX-License-Identifier: MPL-2.0
//! Error types for toast validation, configuration and window start-up.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by the public API.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The GUI toolkit failed to start or to drive the window.
    #[error("Window Error: {0}")]
    Window(String),
}

/// Rejected toast input. Raised before any window is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title too long: {length} characters, at most {max} allowed")]
    TitleTooLong { length: usize, max: usize },

    #[error("message too long: {length} characters, at most {max} allowed")]
    MessageTooLong { length: usize, max: usize },

    #[error("invalid color format: {0:?}, use #RRGGBB")]
    InvalidColorFormat(String),

    #[error("invalid position: {given:?}, possible values: {}", .valid.join(", "))]
    InvalidPosition {
        given: String,
        valid: Vec<&'static str>,
    },

    #[error("invalid font: {given:?}, available fonts: {}", .available.join(", "))]
    InvalidFont {
        given: String,
        available: Vec<String>,
    },
}

/// Failure to turn an icon file into pixels. Always recovered by the caller.
#[derive(Debug, Error)]
pub enum IconLoadError {
    #[error("cannot read icon {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode icon {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn validation_error_is_transparent() {
        let err: Error = ValidationError::InvalidColorFormat("blue".into()).into();
        assert_eq!(
            err.to_string(),
            "invalid color format: \"blue\", use #RRGGBB"
        );
    }

    #[test]
    fn invalid_position_lists_valid_values() {
        let err = ValidationError::InvalidPosition {
            given: "top".into(),
            valid: vec!["center", "upper-left"],
        };
        let message = err.to_string();
        assert!(message.contains("\"top\""));
        assert!(message.ends_with("center, upper-left"));
    }

    #[test]
    fn invalid_font_lists_available_fonts() {
        let err = ValidationError::InvalidFont {
            given: "Nope".into(),
            available: vec!["DejaVu Sans".into(), "Noto Sans".into()],
        };
        assert!(err.to_string().contains("DejaVu Sans, Noto Sans"));
    }

    #[test]
    fn title_too_long_reports_lengths() {
        let err = ValidationError::TitleTooLong { length: 25, max: 24 };
        assert_eq!(
            err.to_string(),
            "title too long: 25 characters, at most 24 allowed"
        );
    }
}
