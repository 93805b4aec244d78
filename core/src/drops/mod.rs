//! The drop pipeline: admission, pending queue, and in-flight animation.
//!
//! Host events pass through [`Admission`] to become [`DropRecord`]s, wait in
//! the [`DropQueue`] ordered by skill priority, and are promoted each tick by
//! the [`DropAnimator`] into on-screen [`InFlightDrop`]s.

mod admission;
mod animator;
mod experience;
mod queue;


pub use admission::{Admission, SYNTHETIC_AMOUNT_LIMIT, SkillFilter};
pub use animator::{DropAnimator, FINISHED_FRAME, InFlightDrop, ease_out_cubic};
pub use experience::ExperienceTable;
pub use queue::DropQueue;

use xpdrops_types::DropStyle;

use crate::skills::Skill;

/// One admitted experience gain. Never mutated after admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropRecord {
    pub skill: Skill,
    /// Always positive
    pub amount: i32,
    pub style: DropStyle,
    /// Injected directly by the host rather than diffed from a stat total
    pub synthetic: bool,
}
