//! Anchor providers
//!
//! The anchor is the screen point drops rise from. It is recomputed every
//! tick; a provider returning `None` means "skip this frame entirely".

use std::sync::Arc;

use xpdrops_core::host::AvatarProjection;
use xpdrops_types::{FixedBoxConfig, XpDropsConfig};

/// Upper bound on the z offset used to place drops above the avatar
pub const MAX_AVATAR_TEXT_Z: i32 = 140;

/// Screen point drops are positioned around
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub trait AnchorProvider {
    fn compute_anchor(&self) -> Option<Anchor>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed box
// ─────────────────────────────────────────────────────────────────────────────

/// Drops rise from the bottom center of a configured screen box
#[derive(Debug, Clone)]
pub struct FixedBoxAnchor {
    area: FixedBoxConfig,
}

impl FixedBoxAnchor {
    pub fn new(area: FixedBoxConfig) -> Self {
        Self { area }
    }
}

impl AnchorProvider for FixedBoxAnchor {
    fn compute_anchor(&self) -> Option<Anchor> {
        let area = &self.area;
        Some(Anchor::new(
            area.x as f32 + area.width as f32 / 2.0,
            area.y as f32 + area.height as f32,
        ))
    }

    fn name(&self) -> &'static str {
        "fixed_box"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Follow player
// ─────────────────────────────────────────────────────────────────────────────

/// Drops rise from above the local player's head
pub struct FollowPlayerAnchor {
    avatar: Arc<dyn AvatarProjection + Send + Sync>,
    offset_x: i32,
    /// Upward-positive
    offset_y: i32,
}

impl FollowPlayerAnchor {
    pub fn new(avatar: Arc<dyn AvatarProjection + Send + Sync>, offset_x: i32, offset_y: i32) -> Self {
        Self {
            avatar,
            offset_x,
            offset_y,
        }
    }
}

impl AnchorProvider for FollowPlayerAnchor {
    fn compute_anchor(&self) -> Option<Anchor> {
        let z_offset = self.avatar.logical_height()?.min(MAX_AVATAR_TEXT_Z);
        let point = self.avatar.project_text_location(z_offset)?;
        // Screen y grows downward
        Some(Anchor::new(
            (point.x + self.offset_x) as f32,
            (point.y - self.offset_y) as f32,
        ))
    }

    fn name(&self) -> &'static str {
        "follow_player"
    }
}

/// Provider for the variant `config` selects
pub fn provider_for(
    config: &XpDropsConfig,
    avatar: &Arc<dyn AvatarProjection + Send + Sync>,
) -> Box<dyn AnchorProvider> {
    if config.attach_to_player {
        Box::new(FollowPlayerAnchor::new(
            Arc::clone(avatar),
            config.attach_offset_x,
            config.attach_offset_y,
        ))
    } else {
        Box::new(FixedBoxAnchor::new(config.fixed_box))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use xpdrops_core::host::ScreenPoint;

    struct Avatar {
        height: Option<i32>,
        point: Option<ScreenPoint>,
        asked: Mutex<Vec<i32>>,
    }

    impl AvatarProjection for Avatar {
        fn logical_height(&self) -> Option<i32> {
            self.height
        }

        fn project_text_location(&self, z_offset: i32) -> Option<ScreenPoint> {
            self.asked.lock().unwrap().push(z_offset);
            self.point
        }
    }

    fn avatar(height: Option<i32>, point: Option<ScreenPoint>) -> Arc<Avatar> {
        Arc::new(Avatar {
            height,
            point,
            asked: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_fixed_box_anchor_is_bottom_center() {
        let anchor = FixedBoxAnchor::new(FixedBoxConfig {
            x: 100,
            y: 50,
            width: 64,
            height: 160,
        });
        assert_eq!(anchor.compute_anchor(), Some(Anchor::new(132.0, 210.0)));
    }

    #[test]
    fn test_follow_player_applies_offsets() {
        let avatar = avatar(Some(98), Some(ScreenPoint::new(400, 300)));
        let anchor = FollowPlayerAnchor::new(avatar.clone(), 10, 25);

        assert_eq!(anchor.compute_anchor(), Some(Anchor::new(410.0, 275.0)));
        assert_eq!(*avatar.asked.lock().unwrap(), vec![98]);
    }

    #[test]
    fn test_follow_player_caps_height() {
        let avatar = avatar(Some(400), Some(ScreenPoint::new(0, 0)));
        let anchor = FollowPlayerAnchor::new(avatar.clone(), 0, 0);

        anchor.compute_anchor();
        assert_eq!(*avatar.asked.lock().unwrap(), vec![MAX_AVATAR_TEXT_Z]);
    }

    #[test]
    fn test_follow_player_without_avatar_or_projection() {
        let no_player = FollowPlayerAnchor::new(avatar(None, Some(ScreenPoint::new(1, 1))), 0, 0);
        assert_eq!(no_player.compute_anchor(), None);

        let off_screen = FollowPlayerAnchor::new(avatar(Some(90), None), 0, 0);
        assert_eq!(off_screen.compute_anchor(), None);
    }

    #[test]
    fn test_provider_for_follows_config() {
        let avatar: Arc<dyn AvatarProjection + Send + Sync> = avatar(None, None);
        let fixed = provider_for(&XpDropsConfig::default(), &avatar);
        assert_eq!(fixed.name(), "fixed_box");

        let config = XpDropsConfig {
            attach_to_player: true,
            ..XpDropsConfig::default()
        };
        assert_eq!(provider_for(&config, &avatar).name(), "follow_player");
    }
}
