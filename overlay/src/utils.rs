//! Common utility functions for drop rendering
//!
//! Number formatting is delegated to `xpdrops_types::formatting` so config
//! previews and the overlay agree on the text.

use tiny_skia::Color;
use xpdrops_types::{DropStyle, StyleColors};

pub use xpdrops_types::formatting;

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Configured style color with its alpha replaced by a glyph's 0..=255 alpha
pub fn style_color(colors: &StyleColors, style: DropStyle, alpha: f32) -> Color {
    let [r, g, b, _] = colors.for_style(style);
    Color::from_rgba8(r, g, b, alpha_u8(alpha))
}

/// Black at the given glyph alpha, used for the text shadow
pub fn shadow_color(alpha: f32) -> Color {
    Color::from_rgba8(0, 0, 0, alpha_u8(alpha))
}

#[inline]
fn alpha_u8(alpha: f32) -> u8 {
    alpha.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_color_takes_glyph_alpha() {
        let colors = StyleColors::default();
        let color = style_color(&colors, DropStyle::Mage, 127.6);
        let [r, g, b, _] = colors.mage;
        assert_eq!(color, Color::from_rgba8(r, g, b, 127));
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(shadow_color(300.0), Color::from_rgba8(0, 0, 0, 255));
        assert_eq!(shadow_color(-4.0), Color::from_rgba8(0, 0, 0, 0));
        assert_eq!(color_from_rgba([1, 2, 3, 4]), Color::from_rgba8(1, 2, 3, 4));
    }
}
