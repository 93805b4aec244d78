//! Drop renderer
//!
//! Paints the in-flight glyphs around an anchor. Each glyph is its summed
//! amount with a one-pixel black shadow, tinted by combat style, followed
//! leftward by one icon per contributing skill. Glyphs are drawn in list
//! order so newer ones land on top.

use xpdrops_core::drops::InFlightDrop;
use xpdrops_core::host::SpriteLookup;
use xpdrops_core::skills::SkillIconTable;
use xpdrops_types::XpDropsConfig;

use crate::anchor::Anchor;
use crate::canvas::Canvas;
use crate::icons::IconCache;
use crate::utils::{formatting, shadow_color, style_color};

/// Offset in pixels for text drop shadow
const SHADOW_OFFSET: f32 = 1.0;

/// Space between the text and the nearest icon, and between icons
const ICON_GAP: f32 = 2.0;

#[derive(Debug, Default)]
pub struct DropRenderer {
    icons: IconCache,
}

impl DropRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon_cache(&self) -> &IconCache {
        &self.icons
    }

    /// Draw every unfinished glyph. Returns how many were drawn.
    pub fn render<C, S>(
        &mut self,
        canvas: &mut C,
        anchor: Anchor,
        drops: &[InFlightDrop],
        config: &XpDropsConfig,
        icon_table: &SkillIconTable,
        sprites: &S,
    ) -> usize
    where
        C: Canvas + ?Sized,
        S: SpriteLookup + ?Sized,
    {
        canvas.set_font(&config.font);

        let mut drawn = 0;
        for drop in drops.iter().filter(|d| !d.is_finished()) {
            let text = formatting::format_drop_amount(
                drop.amount,
                &config.text_prefix,
                config.european_number_format,
            );

            let text_width = canvas.measure_text(&text);
            let x = (anchor.x + drop.x_offset - text_width / 2.0).trunc();
            let y = (anchor.y + drop.y_offset).trunc();

            canvas.draw_text(
                &text,
                x + SHADOW_OFFSET,
                y + SHADOW_OFFSET,
                shadow_color(drop.alpha),
            );
            canvas.draw_text(&text, x, y, style_color(&config.colors, drop.style, drop.alpha));

            if config.show_icons {
                self.draw_icons(canvas, drop, x - ICON_GAP, y, icon_table, sprites);
            }
            drawn += 1;
        }
        drawn
    }

    /// Icons run right to left from `right`, sized to the font's ascent so
    /// they sit on the text baseline. Missing sprites are skipped.
    fn draw_icons<C, S>(
        &mut self,
        canvas: &mut C,
        drop: &InFlightDrop,
        right: f32,
        baseline: f32,
        icon_table: &SkillIconTable,
        sprites: &S,
    ) where
        C: Canvas + ?Sized,
        S: SpriteLookup + ?Sized,
    {
        let height = canvas.max_ascent();
        if height <= 0.0 {
            return;
        }
        let top = baseline - height;
        let opacity = (drop.alpha / 255.0).clamp(0.0, 1.0);

        let mut cursor = right;
        for &skill in &drop.icons {
            let Some(icon) = self.icons.get(icon_table.sprite(skill), sprites) else {
                continue;
            };
            let width = height * icon.width() as f32 / icon.height() as f32;
            cursor -= width;
            canvas.draw_icon(icon.as_ref(), cursor, top, width, height, opacity);
            cursor -= ICON_GAP;
        }
    }
}
