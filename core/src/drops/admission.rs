//! Decides which host experience events become drops.

use std::collections::HashSet;

use crate::host::ActiveStyleQuery;
use crate::skills::Skill;
use crate::style::{active_style, style_for_skill};

use super::{DropRecord, ExperienceTable};

/// Synthetic amounts at or above this are host placeholder values
pub const SYNTHETIC_AMOUNT_LIMIT: i32 = 20_000_000;

/// Most players know runecraft by its longer name
const RUNECRAFT_ALIAS: (&str, &str) = ("runecrafting", "runecraft");

/// Lower-cased skill names the user does not want drops for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    names: HashSet<String>,
}

impl SkillFilter {
    /// Parse the comma-separated config value
    pub fn from_csv(csv: &str) -> Self {
        let mut names: HashSet<String> = csv
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        for name in &names {
            if name != RUNECRAFT_ALIAS.0 && Skill::from_name(name).is_none() {
                tracing::warn!(name = %name, "Unknown skill in filter list");
            }
        }

        if names.contains(RUNECRAFT_ALIAS.0) {
            names.insert(RUNECRAFT_ALIAS.1.to_string());
        }

        Self { names }
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.names.contains(&skill.name().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Admission rules for raw and synthetic experience events
#[derive(Debug, Clone, Default)]
pub struct Admission {
    filter: SkillFilter,
}

impl Admission {
    pub fn new(filter: SkillFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &SkillFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: SkillFilter) {
        self.filter = filter;
    }

    /// Diff a new stat total against the last known one. The table is
    /// updated whether or not a drop is produced.
    pub fn admit_stat_change<S: ActiveStyleQuery + ?Sized>(
        &self,
        experience: &mut ExperienceTable,
        skill: Skill,
        total: i32,
        styles: &S,
    ) -> Option<DropRecord> {
        let previous = experience.record(skill, total);
        let delta = total.saturating_sub(previous);

        if previous <= 0 {
            tracing::debug!(%skill, total, "No experience baseline yet, skipping drop");
            return None;
        }
        if delta <= 0 {
            return None;
        }
        if self.filter.contains(skill) {
            tracing::debug!(%skill, delta, "Skill filtered, skipping drop");
            return None;
        }

        Some(DropRecord {
            skill,
            amount: delta,
            style: resolve_style(skill, styles),
            synthetic: false,
        })
    }

    /// Admit a host-injected gain that has no stat total behind it
    pub fn admit_synthetic<S: ActiveStyleQuery + ?Sized>(
        &self,
        skill: Skill,
        amount: i32,
        styles: &S,
    ) -> Option<DropRecord> {
        if amount >= SYNTHETIC_AMOUNT_LIMIT {
            tracing::debug!(%skill, amount, "Ignoring placeholder synthetic drop");
            return None;
        }
        if amount <= 0 {
            return None;
        }
        if self.filter.contains(skill) {
            tracing::debug!(%skill, amount, "Skill filtered, skipping synthetic drop");
            return None;
        }

        Some(DropRecord {
            skill,
            amount,
            style: resolve_style(skill, styles),
            synthetic: true,
        })
    }
}

fn resolve_style<S: ActiveStyleQuery + ?Sized>(
    skill: Skill,
    styles: &S,
) -> xpdrops_types::DropStyle {
    style_for_skill(skill, active_style(&styles.active_prayers()))
}
