//! Promotion order for queued drops.

use super::{SKILL_COUNT, Skill};

/// Ranks used when no custom table is configured. Combat skills first so a
/// kill's drops read attack-style, then hitpoints, then everything else.
pub const STANDARD_PRIORITY: [(Skill, i32); SKILL_COUNT] = [
    (Skill::Attack, 1),
    (Skill::Strength, 2),
    (Skill::Defence, 3),
    (Skill::Ranged, 4),
    (Skill::Magic, 5),
    (Skill::Hitpoints, 6),
    (Skill::Prayer, 7),
    (Skill::Slayer, 8),
    (Skill::Cooking, 9),
    (Skill::Woodcutting, 10),
    (Skill::Fletching, 11),
    (Skill::Fishing, 12),
    (Skill::Firemaking, 13),
    (Skill::Crafting, 14),
    (Skill::Smithing, 15),
    (Skill::Mining, 16),
    (Skill::Herblore, 17),
    (Skill::Agility, 18),
    (Skill::Thieving, 19),
    (Skill::Farming, 20),
    (Skill::Runecraft, 21),
    (Skill::Hunter, 22),
    (Skill::Construction, 23),
];

/// Marker for a skill missing from the table
const UNMAPPED: i32 = -1;

/// Static skill → rank lookup. Lower ranks are promoted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: [i32; SKILL_COUNT],
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_ranks(&STANDARD_PRIORITY)
    }
}

impl PriorityTable {
    /// Build a table from explicit pairs. Skills left out, or given a
    /// negative rank, sort after every mapped skill.
    pub fn from_ranks(ranks: &[(Skill, i32)]) -> Self {
        let mut table = [UNMAPPED; SKILL_COUNT];
        for &(skill, rank) in ranks {
            table[skill.ordinal()] = rank;
        }
        for skill in Skill::ALL {
            if table[skill.ordinal()] < 0 {
                tracing::warn!(%skill, "Skill has no priority rank, treating as lowest priority");
            }
        }
        Self { ranks: table }
    }

    /// Effective sort key for a skill
    pub fn rank(&self, skill: Skill) -> u32 {
        u32::try_from(self.ranks[skill.ordinal()]).unwrap_or(u32::MAX)
    }
}
