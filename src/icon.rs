// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG into an RGBA window icon.
//! Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_resizer.svg");

/// Rasterize the embedded SVG icon to an RGBA buffer of `ICON_SIZE` square.
fn rasterize(svg: &str, size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default())
        .map_err(|err| log::warn!("window icon SVG is invalid: {err}"))
        .ok()?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / orig_size.width(),
        size as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Returns the window icon, or `None` if it cannot be produced.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(SVG_SOURCE, ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
