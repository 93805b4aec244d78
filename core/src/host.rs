//! Narrow interfaces onto the host game client.
//!
//! The core never talks to the client directly. Everything it needs, from
//! prayer state to sprite bitmaps, comes through these traits so the
//! pipeline can be driven by a real client, a test double, or the demo.

use std::collections::HashSet;

use crate::skills::{SKILL_COUNT, SpriteId};
use crate::style::Prayer;

/// Which style-granting prayers are currently on
pub trait ActiveStyleQuery {
    fn active_prayers(&self) -> HashSet<Prayer>;
}

/// Login state and authoritative experience totals
pub trait PlayerStats {
    fn is_logged_in(&self) -> bool;

    /// Current absolute experience per skill, indexed by [`crate::Skill::ordinal`]
    fn skill_experiences(&self) -> [i32; SKILL_COUNT];
}

/// Access to the client's own XP drop widgets
pub trait NativeDropWidgets {
    fn hide_widget(&mut self, widget_id: i32);
}

/// Everything the plugin needs from the client during event handling
pub trait HostClient: ActiveStyleQuery + PlayerStats + NativeDropWidgets {}

impl<T: ActiveStyleQuery + PlayerStats + NativeDropWidgets> HostClient for T {}

/// Straight-alpha RGBA bitmap as handed out by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major
    pub rgba: Vec<u8>,
}

impl IconBitmap {
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba.len() == self.width as usize * self.height as usize * 4
    }
}

/// Sprite archive lookup. `None` means the sprite is not available (yet).
pub trait SpriteLookup {
    fn sprite(&self, sprite_id: SpriteId) -> Option<IconBitmap>;
}

/// Integer screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The local player's avatar as seen by the camera
pub trait AvatarProjection {
    /// Model height of the avatar, `None` when there is no local player
    fn logical_height(&self) -> Option<i32>;

    /// Canvas position for text drawn `z_offset` units above the avatar's
    /// feet, `None` when it is off screen
    fn project_text_location(&self, z_offset: i32) -> Option<ScreenPoint>;
}
