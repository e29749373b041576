// SPDX-License-Identifier: MPL-2.0
//! Placeholder information glyph.
//! Rasterizes an embedded SVG at runtime to a straight-alpha RGBA buffer.
//! Returns `None` if rendering fails, in which case a text glyph is used.

use crate::ui::design_tokens::sizing;
use iced::widget::image::Handle;
use resvg::usvg;
use std::sync::OnceLock;

/// Blue disc with a white "i", drawn with shapes only so no font is needed.
const INFO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <circle cx="12" cy="12" r="11" fill="#3478F6"/>
  <circle cx="12" cy="6.5" r="1.75" fill="#FFFFFF"/>
  <rect x="10.5" y="9.5" width="3" height="9.5" rx="1.2" fill="#FFFFFF"/>
</svg>"##;

/// Cached handle of the glyph at [`sizing::GLYPH`] pixels.
pub fn info_glyph() -> Option<Handle> {
    static HANDLE: OnceLock<Option<Handle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            let pixels = rasterize(INFO_SVG, sizing::GLYPH);
            if pixels.is_none() {
                tracing::warn!("failed to rasterize placeholder glyph");
            }
            pixels.map(|rgba| Handle::from_rgba(sizing::GLYPH, sizing::GLYPH, rgba))
        })
        .clone()
}

/// Renders `svg` into a `target`x`target` RGBA buffer.
fn rasterize(svg: &str, target: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    Some(
        pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect(),
    )
}
