//! Skill → sprite mapping for drop icons.

use super::{SKILL_COUNT, Skill};
use crate::config::ConfigError;

/// Host sprite archive id
pub type SpriteId = u32;

/// Small skill icons in the host's sprite archive
pub const STANDARD_SKILL_ICONS: [(Skill, SpriteId); SKILL_COUNT] = [
    (Skill::Attack, 197),
    (Skill::Defence, 199),
    (Skill::Strength, 198),
    (Skill::Hitpoints, 203),
    (Skill::Ranged, 200),
    (Skill::Prayer, 201),
    (Skill::Magic, 202),
    (Skill::Cooking, 212),
    (Skill::Woodcutting, 214),
    (Skill::Fletching, 208),
    (Skill::Fishing, 211),
    (Skill::Firemaking, 213),
    (Skill::Crafting, 207),
    (Skill::Smithing, 210),
    (Skill::Mining, 209),
    (Skill::Herblore, 205),
    (Skill::Agility, 204),
    (Skill::Thieving, 206),
    (Skill::Slayer, 216),
    (Skill::Farming, 217),
    (Skill::Runecraft, 215),
    (Skill::Hunter, 220),
    (Skill::Construction, 221),
];

/// Complete skill → sprite table. Construction fails unless every skill
/// appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillIconTable {
    sprites: [SpriteId; SKILL_COUNT],
}

impl SkillIconTable {
    pub fn new(entries: &[(Skill, SpriteId)]) -> Result<Self, ConfigError> {
        let mut sprites: [Option<SpriteId>; SKILL_COUNT] = [None; SKILL_COUNT];
        for &(skill, sprite) in entries {
            let slot = &mut sprites[skill.ordinal()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateIcon { skill });
            }
            *slot = Some(sprite);
        }

        let missing: Vec<Skill> = Skill::ALL
            .into_iter()
            .filter(|skill| sprites[skill.ordinal()].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::IncompleteIconTable { missing });
        }

        Ok(Self {
            sprites: sprites.map(|s| s.unwrap_or_default()),
        })
    }

    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(&STANDARD_SKILL_ICONS)
    }

    pub fn sprite(&self, skill: Skill) -> SpriteId {
        self.sprites[skill.ordinal()]
    }
}
