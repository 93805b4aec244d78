//! Combat-style resolution from active prayers.

use std::collections::HashSet;

use xpdrops_types::DropStyle;

use crate::skills::Skill;

/// Prayers that mark a drop with a combat style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    BurstOfStrength,
    ClarityOfThought,
    SharpEye,
    MysticWill,
    SuperhumanStrength,
    ImprovedReflexes,
    HawkEye,
    MysticLore,
    UltimateStrength,
    IncredibleReflexes,
    EagleEye,
    MysticMight,
    Chivalry,
    Piety,
    Rigour,
    Augury,
}

/// Canonical scan order. When several are active the first match wins.
pub const STYLE_PRAYERS: [(Prayer, DropStyle); 16] = [
    (Prayer::BurstOfStrength, DropStyle::Melee),
    (Prayer::ClarityOfThought, DropStyle::Melee),
    (Prayer::SharpEye, DropStyle::Range),
    (Prayer::MysticWill, DropStyle::Mage),
    (Prayer::SuperhumanStrength, DropStyle::Melee),
    (Prayer::ImprovedReflexes, DropStyle::Melee),
    (Prayer::HawkEye, DropStyle::Range),
    (Prayer::MysticLore, DropStyle::Mage),
    (Prayer::UltimateStrength, DropStyle::Melee),
    (Prayer::IncredibleReflexes, DropStyle::Melee),
    (Prayer::EagleEye, DropStyle::Range),
    (Prayer::MysticMight, DropStyle::Mage),
    (Prayer::Chivalry, DropStyle::Melee),
    (Prayer::Piety, DropStyle::Melee),
    (Prayer::Rigour, DropStyle::Range),
    (Prayer::Augury, DropStyle::Mage),
];

/// Style of the first active style-granting prayer, if any
pub fn active_style(active: &HashSet<Prayer>) -> Option<DropStyle> {
    STYLE_PRAYERS
        .iter()
        .find(|(prayer, _)| active.contains(prayer))
        .map(|&(_, style)| style)
}

/// Style a drop for `skill` gets. Only skills linked to the active style
/// pick it up; everything else stays default.
pub fn style_for_skill(skill: Skill, active: Option<DropStyle>) -> DropStyle {
    let linked = match skill {
        Skill::Magic => DropStyle::Mage,
        Skill::Ranged => DropStyle::Range,
        Skill::Attack | Skill::Strength | Skill::Defence => DropStyle::Melee,
        _ => return DropStyle::Default,
    };
    match active {
        Some(style) if style == linked => style,
        _ => DropStyle::Default,
    }
}
