//! Graphics context the renderer paints through
//!
//! The host owns the actual surface and text rasterizer. All the renderer
//! needs is text metrics, text drawing and scaled image blits, so that is
//! all this trait asks for.

use tiny_skia::{Color, PixmapRef};
use xpdrops_types::FontConfig;

pub trait Canvas {
    /// Select the font for the following measure and draw calls
    fn set_font(&mut self, font: &FontConfig);

    /// Advance width of `text` in the current font
    fn measure_text(&mut self, text: &str) -> f32;

    /// Largest ascent of any glyph in the current font
    fn max_ascent(&mut self) -> f32;

    /// Draw `text` with its baseline starting at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);

    /// Draw `icon` scaled into the given rectangle at `opacity` (0.0 to 1.0)
    fn draw_icon(
        &mut self,
        icon: PixmapRef<'_>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        opacity: f32,
    );
}
