//! Trainable skills and the static per-skill tables hung off them.

mod icons;
mod priority;

pub use icons::{STANDARD_SKILL_ICONS, SkillIconTable, SpriteId};
pub use priority::{PriorityTable, STANDARD_PRIORITY};

use std::fmt;

use phf::phf_map;

/// Number of trainable skills (the host's "overall" pseudo-skill excluded)
pub const SKILL_COUNT: usize = 23;

/// A trainable skill, in the host's ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecraft,
    Hunter,
    Construction,
}

impl Skill {
    pub const ALL: [Skill; SKILL_COUNT] = [
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecraft,
        Skill::Hunter,
        Skill::Construction,
    ];

    /// Stable index used by the per-skill tables
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Skill> {
        Self::ALL.get(ordinal).copied()
    }

    /// Display name as the host spells it
    pub fn name(self) -> &'static str {
        match self {
            Skill::Attack => "Attack",
            Skill::Defence => "Defence",
            Skill::Strength => "Strength",
            Skill::Hitpoints => "Hitpoints",
            Skill::Ranged => "Ranged",
            Skill::Prayer => "Prayer",
            Skill::Magic => "Magic",
            Skill::Cooking => "Cooking",
            Skill::Woodcutting => "Woodcutting",
            Skill::Fletching => "Fletching",
            Skill::Fishing => "Fishing",
            Skill::Firemaking => "Firemaking",
            Skill::Crafting => "Crafting",
            Skill::Smithing => "Smithing",
            Skill::Mining => "Mining",
            Skill::Herblore => "Herblore",
            Skill::Agility => "Agility",
            Skill::Thieving => "Thieving",
            Skill::Slayer => "Slayer",
            Skill::Farming => "Farming",
            Skill::Runecraft => "Runecraft",
            Skill::Hunter => "Hunter",
            Skill::Construction => "Construction",
        }
    }

    /// Case-insensitive lookup by host name
    pub fn from_name(name: &str) -> Option<Skill> {
        SKILLS_BY_NAME.get(name.trim().to_lowercase().as_str()).copied()
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SKILLS_BY_NAME: phf::Map<&'static str, Skill> = phf_map! {
    "attack" => Skill::Attack,
    "defence" => Skill::Defence,
    "strength" => Skill::Strength,
    "hitpoints" => Skill::Hitpoints,
    "ranged" => Skill::Ranged,
    "prayer" => Skill::Prayer,
    "magic" => Skill::Magic,
    "cooking" => Skill::Cooking,
    "woodcutting" => Skill::Woodcutting,
    "fletching" => Skill::Fletching,
    "fishing" => Skill::Fishing,
    "firemaking" => Skill::Firemaking,
    "crafting" => Skill::Crafting,
    "smithing" => Skill::Smithing,
    "mining" => Skill::Mining,
    "herblore" => Skill::Herblore,
    "agility" => Skill::Agility,
    "thieving" => Skill::Thieving,
    "slayer" => Skill::Slayer,
    "farming" => Skill::Farming,
    "runecraft" => Skill::Runecraft,
    "hunter" => Skill::Hunter,
    "construction" => Skill::Construction,
};
