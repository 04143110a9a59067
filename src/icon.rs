// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

/// Edge length of the rendered icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders the icon at [`ICON_SIZE`]. `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let pixels = render_rgba(ICON_SIZE)?;
    icon::from_rgba(pixels, ICON_SIZE, ICON_SIZE).ok()
}

fn render_rgba(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon could not be parsed");
            return None;
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let target = size as f32;
    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        target / original.width(),
        target / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_rgba_buffer() {
        let pixels = render_rgba(32).expect("embedded icon renders");
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
