// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the toast panel. Window geometry (width, height, screen
margins) lives in [`crate::domain::toast::geometry`]; this module only covers
what is drawn inside the window.

## Organization

- **Palette**: Base colors
- **Layout**: Insets and gaps inside the panel
- **Sizing**: Component sizes
- **Typography**: Font size scale

## Examples

```
use iced_toast::ui::design_tokens::{layout, typography};

let wrap_width = 300.0 - layout::WRAP_INSET;
assert!(typography::TITLE > typography::BODY);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Label foreground on every background color.
    pub const WHITE: Color = Color::WHITE;

    /// Fill of the placeholder glyph.
    pub const INFO_500: Color = Color::from_rgb(0.204, 0.471, 0.965);
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    /// Icon offset from the top-left window corner, on both axes.
    pub const ICON_INSET: f32 = 10.0;

    /// Space above the title.
    pub const TITLE_PADDING: f32 = 5.0;

    /// Space between title and message (padding below one plus above the other).
    pub const LABEL_GAP: f32 = 10.0;

    /// Horizontal space taken from the window width before wrapping the message.
    pub const WRAP_INSET: f32 = 20.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Edge length of the rasterized placeholder glyph.
    pub const GLYPH: u32 = 24;
}

// ============================================================================
// Typography
// ============================================================================

/// Font sizes in logical pixels. Point sizes assume 96 DPI.
pub mod typography {
    const PX_PER_PT: f32 = 96.0 / 72.0;

    /// Title label (12pt).
    pub const TITLE: f32 = 12.0 * PX_PER_PT;

    /// Message label (10pt).
    pub const BODY: f32 = 10.0 * PX_PER_PT;

    /// Text fallback for the placeholder glyph (12pt).
    pub const GLYPH: f32 = 12.0 * PX_PER_PT;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_sixteen_pixels() {
        assert!((typography::TITLE - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn label_gap_is_twice_title_padding() {
        assert!((layout::LABEL_GAP - 2.0 * layout::TITLE_PADDING).abs() < f32::EPSILON);
    }

    #[test]
    fn glyph_fits_inside_minimum_window() {
        let glyph_bottom = layout::ICON_INSET + sizing::GLYPH as f32;
        assert!(glyph_bottom < crate::domain::toast::geometry::MIN_HEIGHT as f32);
    }
}
