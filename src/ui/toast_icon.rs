// SPDX-License-Identifier: MPL-2.0
//! Toast icon loading.
//!
//! A caller-supplied image is decoded and shrunk by keeping every eighth
//! pixel on each axis. Any failure degrades to the placeholder glyph; it is
//! logged but never reported as an error.

use crate::error::IconLoadError;
use iced::widget::image::Handle;
use image_rs::RgbaImage;
use std::fs;
use std::path::Path;

/// Keep one pixel out of this many, per axis.
pub const SUBSAMPLE_FACTOR: u32 = 8;

/// What is drawn in the top-left corner of the toast.
#[derive(Debug, Clone)]
pub enum ToastIcon {
    /// Decoded, subsampled RGBA image.
    Image {
        handle: Handle,
        width: u32,
        height: u32,
    },
    /// Placeholder information glyph.
    Glyph,
}

impl ToastIcon {
    /// Loads the icon at `path`, falling back to the glyph when there is no
    /// path or the file cannot be decoded.
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return ToastIcon::Glyph;
        };

        match load_icon(path) {
            Ok(image) => {
                let (width, height) = image.dimensions();
                tracing::debug!(path = %path.display(), width, height, "loaded toast icon");
                ToastIcon::Image {
                    handle: Handle::from_rgba(width, height, image.into_raw()),
                    width,
                    height,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "icon unavailable, showing placeholder glyph");
                ToastIcon::Glyph
            }
        }
    }

    #[must_use]
    pub fn is_glyph(&self) -> bool {
        matches!(self, ToastIcon::Glyph)
    }

    /// Pixel size of the icon, `None` for the glyph.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ToastIcon::Image { width, height, .. } => Some((*width, *height)),
            ToastIcon::Glyph => None,
        }
    }
}

/// Reads and decodes the image at `path`, then subsamples it.
pub fn load_icon(path: &Path) -> Result<RgbaImage, IconLoadError> {
    let bytes = fs::read(path).map_err(|source| IconLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image_rs::load_from_memory(&bytes).map_err(|source| IconLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(subsample(&decoded.to_rgba8(), SUBSAMPLE_FACTOR))
}

/// Keeps the pixels at multiples of `factor` on both axes.
///
/// The result is `ceil(dimension / factor)` pixels along each axis.
#[must_use]
pub fn subsample(image: &RgbaImage, factor: u32) -> RgbaImage {
    let factor = factor.max(1);
    if image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    let width = image.width().div_ceil(factor);
    let height = image.height().div_ceil(factor);
    RgbaImage::from_fn(width, height, |x, y| *image.get_pixel(x * factor, y * factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn subsample_rounds_dimensions_up() {
        let image = RgbaImage::new(65, 16);
        let small = subsample(&image, SUBSAMPLE_FACTOR);
        assert_eq!(small.dimensions(), (9, 2));
    }

    #[test]
    fn subsample_keeps_every_nth_pixel() {
        let image = RgbaImage::from_fn(16, 16, |x, _| if x % 8 == 0 { RED } else { BLUE });
        let small = subsample(&image, 8);
        assert_eq!(small.dimensions(), (2, 2));
        assert!(small.pixels().all(|p| *p == RED));
    }

    #[test]
    fn subsample_of_tiny_image_keeps_one_pixel() {
        let image = RgbaImage::from_pixel(3, 3, BLUE);
        let small = subsample(&image, 8);
        assert_eq!(small.dimensions(), (1, 1));
        assert_eq!(*small.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn factor_zero_is_treated_as_one() {
        let image = RgbaImage::new(5, 4);
        assert_eq!(subsample(&image, 0).dimensions(), (5, 4));
    }

    #[test]
    fn png_icon_is_loaded_and_shrunk() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(128, 64, RED)
            .save(&path)
            .expect("failed to write png");

        let icon = ToastIcon::resolve(Some(&path));
        assert_eq!(icon.dimensions(), Some((16, 8)));
    }

    #[test]
    fn missing_path_uses_glyph() {
        assert!(ToastIcon::resolve(None).is_glyph());
    }

    #[test]
    fn nonexistent_file_uses_glyph() {
        let dir = tempdir().expect("failed to create temp dir");
        let icon = ToastIcon::resolve(Some(&dir.path().join("missing.png")));
        assert!(icon.is_glyph());
    }

    #[test]
    fn undecodable_file_uses_glyph() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load_icon(&path), Err(IconLoadError::Decode { .. })));
        assert!(ToastIcon::resolve(Some(&path)).is_glyph());
    }

    #[test]
    fn read_error_names_the_path() {
        let err = load_icon(Path::new("/no/such/dir/icon.png")).unwrap_err();
        assert!(matches!(err, IconLoadError::Read { .. }));
        assert!(err.to_string().contains("/no/such/dir/icon.png"));
    }
}
