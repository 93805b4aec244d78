use crate::skills::{SKILL_COUNT, Skill};

/// Last-known absolute experience per skill, used to turn stat totals into
/// deltas. Zero means "no baseline yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceTable {
    previous: [i32; SKILL_COUNT],
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self {
            previous: [0; SKILL_COUNT],
        }
    }
}

impl ExperienceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self, skill: Skill) -> i32 {
        self.previous[skill.ordinal()]
    }

    /// Store a new total, returning the one it replaced
    pub fn record(&mut self, skill: Skill, total: i32) -> i32 {
        std::mem::replace(&mut self.previous[skill.ordinal()], total)
    }

    /// Forget every baseline
    pub fn reset(&mut self) {
        self.previous = [0; SKILL_COUNT];
    }

    /// Adopt the host's authoritative totals as the new baseline
    pub fn resync(&mut self, totals: &[i32; SKILL_COUNT]) {
        self.previous = *totals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_returns_previous_total() {
        let mut table = ExperienceTable::new();
        assert_eq!(table.record(Skill::Mining, 100), 0);
        assert_eq!(table.record(Skill::Mining, 150), 100);
        assert_eq!(table.previous(Skill::Mining), 150);
        assert_eq!(table.previous(Skill::Fishing), 0);
    }

    #[test]
    fn test_reset_and_resync() {
        let mut table = ExperienceTable::new();
        table.record(Skill::Agility, 42);
        table.reset();
        assert_eq!(table, ExperienceTable::new());

        let mut totals = [0; SKILL_COUNT];
        totals[Skill::Hunter.ordinal()] = 13_034_431;
        table.resync(&totals);
        assert_eq!(table.previous(Skill::Hunter), 13_034_431);
    }
}
