//! Shared configuration types for the XP drop overlay.
//!
//! These are plain serde structs so the same definitions can be loaded from
//! the TOML config file, edited by a host settings panel, and handed to the
//! core and overlay crates without conversion.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// RGBA color as stored in config files
pub type Color = [u8; 4];

/// Combat-style tag attached to a drop, used only to pick its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropStyle {
    #[default]
    Default,
    Melee,
    Range,
    Mage,
}

impl DropStyle {
    pub fn label(&self) -> &'static str {
        match self {
            DropStyle::Default => "Default",
            DropStyle::Melee => "Melee",
            DropStyle::Range => "Range",
            DropStyle::Mage => "Mage",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Font used for drop text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f32,
    pub bold: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "RuneScape Small".to_string(),
            size: 16.0,
            bold: false,
        }
    }
}

/// Text color for each drop style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleColors {
    pub default: Color,
    pub melee: Color,
    pub range: Color,
    pub mage: Color,
}

impl Default for StyleColors {
    fn default() -> Self {
        Self {
            default: [255, 255, 255, 255],
            melee: [255, 64, 64, 255],
            range: [96, 208, 80, 255],
            mage: [88, 144, 255, 255],
        }
    }
}

impl StyleColors {
    pub fn for_style(&self, style: DropStyle) -> Color {
        match style {
            DropStyle::Default => self.default,
            DropStyle::Melee => self.melee,
            DropStyle::Range => self.range,
            DropStyle::Mage => self.mage,
        }
    }
}

/// Screen rectangle used when drops are not attached to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedBoxConfig {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for FixedBoxConfig {
    fn default() -> Self {
        Self {
            x: 480,
            y: 40,
            width: 64,
            height: 160,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Animation
// ─────────────────────────────────────────────────────────────────────────────

/// Animation tunables. All durations are in render ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Ticks a drop stays on screen
    pub lifetime_frames: u32,
    /// Tick at which the drop starts fading out
    pub fade_start_frames: u32,
    /// Ticks after creation during which same-skill drops merge into it
    pub merge_window_frames: u32,
    /// Pixels travelled upward over the full lifetime
    pub travel_distance: f32,
    /// Maximum horizontal jitter in pixels, either direction
    pub jitter: f32,
    /// Queue entries promoted per tick at most
    pub max_promotions_per_tick: u32,
    /// Ticks the newest drop must be alive before another one spawns
    pub spawn_gap_frames: u32,
    /// Fold every drop promoted in the same tick into one glyph
    pub grouped: bool,
    /// Seed for the jitter generator
    pub jitter_seed: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lifetime_frames: 120,
            fade_start_frames: 80,
            merge_window_frames: 10,
            travel_distance: 100.0,
            jitter: 4.0,
            max_promotions_per_tick: 4,
            spawn_gap_frames: 12,
            grouped: false,
            jitter_seed: 0x5eed,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level config
// ─────────────────────────────────────────────────────────────────────────────

/// Every option the XP drop overlay recognizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpDropsConfig {
    /// Follow the player's avatar instead of using the fixed box
    pub attach_to_player: bool,
    pub attach_offset_x: i32,
    /// Upward-positive vertical offset when attached to the player
    pub attach_offset_y: i32,
    /// Comma-separated skill names that never produce drops
    pub skills_to_filter: String,
    pub fixed_box: FixedBoxConfig,
    pub font: FontConfig,
    pub colors: StyleColors,
    pub animation: AnimationConfig,
    pub show_icons: bool,
    pub text_prefix: String,
    pub european_number_format: bool,
}

impl Default for XpDropsConfig {
    fn default() -> Self {
        Self {
            attach_to_player: false,
            attach_offset_x: 0,
            attach_offset_y: 0,
            skills_to_filter: String::new(),
            fixed_box: FixedBoxConfig::default(),
            font: FontConfig::default(),
            colors: StyleColors::default(),
            animation: AnimationConfig::default(),
            show_icons: true,
            text_prefix: "+".to_string(),
            european_number_format: false,
        }
    }
}
