// SPDX-License-Identifier: MPL-2.0
//! Screen anchors a toast can be placed at.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Where on the screen the toast window is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Center,
    BottomLeft,
    #[default]
    BottomRight,
    BottomCenter,
    UpperCenter,
    UpperLeft,
    UpperRight,
}

impl Position {
    /// Every position, in the order they are listed to users.
    pub const ALL: [Position; 7] = [
        Position::Center,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
        Position::UpperCenter,
        Position::UpperLeft,
        Position::UpperRight,
    ];

    /// Returns the kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Center => "center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
            Position::UpperCenter => "upper-center",
            Position::UpperLeft => "upper-left",
            Position::UpperRight => "upper-right",
        }
    }

    /// Names of all positions.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidPosition {
                given: value.to_string(),
                valid: Self::names(),
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
