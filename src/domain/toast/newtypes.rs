// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! Each wrapper can only be built from a value that satisfies its constraint,
//! so code downstream of validation never re-checks lengths or color syntax.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Bounds
// =============================================================================

/// Length limits, counted in characters (not bytes).
pub mod toast_bounds {
    /// Maximum title length.
    pub const MAX_TITLE_CHARS: usize = 24;
    /// Maximum message length, line breaks included.
    pub const MAX_MESSAGE_CHARS: usize = 120;
}

// =============================================================================
// Title
// =============================================================================

/// Toast title, at most [`toast_bounds::MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Wraps `title`, rejecting it when it is too long.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let length = title.chars().count();
        if length > toast_bounds::MAX_TITLE_CHARS {
            return Err(ValidationError::TitleTooLong {
                length,
                max: toast_bounds::MAX_TITLE_CHARS,
            });
        }
        Ok(Self(title))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Body
// =============================================================================

/// Toast message, at most [`toast_bounds::MAX_MESSAGE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(String);

impl Body {
    /// Wraps `message`, rejecting it when it is too long.
    pub fn new(message: impl Into<String>) -> Result<Self, ValidationError> {
        let message = message.into();
        let length = message.chars().count();
        if length > toast_bounds::MAX_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooLong {
                length,
                max: toast_bounds::MAX_MESSAGE_CHARS,
            });
        }
        Ok(Self(message))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// HexColor
// =============================================================================

/// Opaque RGB color parsed from the `#RRGGBB` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `(r, g, b)` channels.
    #[must_use]
    pub fn rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidColorFormat(value.to_string());

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_at_limit_is_accepted() {
        let title = "x".repeat(toast_bounds::MAX_TITLE_CHARS);
        assert_eq!(Title::new(title.clone()).unwrap().as_str(), title);
    }

    #[test]
    fn title_over_limit_is_rejected() {
        assert_eq!(
            Title::new("x".repeat(25)),
            Err(ValidationError::TitleTooLong { length: 25, max: 24 })
        );
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 24 two-byte characters
        assert!(Title::new("é".repeat(24)).is_ok());
    }

    #[test]
    fn body_over_limit_is_rejected() {
        assert_eq!(
            Body::new("y".repeat(121)),
            Err(ValidationError::MessageTooLong {
                length: 121,
                max: 120
            })
        );
    }

    #[test]
    fn body_at_limit_with_line_breaks_is_accepted() {
        let message = format!("{}\n{}", "a".repeat(59), "b".repeat(60));
        assert_eq!(message.chars().count(), 120);
        assert!(Body::new(message).is_ok());
    }

    #[test]
    fn color_accepts_both_cases() {
        assert_eq!(
            "#aabbcc".parse::<HexColor>().unwrap().rgb8(),
            (0xaa, 0xbb, 0xcc)
        );
        assert_eq!(
            "#AABBCC".parse::<HexColor>().unwrap().rgb8(),
            (0xaa, 0xbb, 0xcc)
        );
    }

    #[test]
    fn color_rejects_malformed_values() {
        for value in ["blue", "#ZZZZZZ", "#abc", "aabbcc", "#aabbccdd", "", "#aabbcc\n", "#ａbbcc0"] {
            assert_eq!(
                value.parse::<HexColor>(),
                Err(ValidationError::InvalidColorFormat(value.to_string())),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn color_display_is_canonical_uppercase() {
        let color: HexColor = "#42a4ff".parse().unwrap();
        assert_eq!(color.to_string(), "#42A4FF");
    }
}
