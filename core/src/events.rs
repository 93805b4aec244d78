//! Events the host feeds into the plugin.

use crate::skills::Skill;

/// Client script that lays out a native XP drop
pub const XPDROPS_SETDROPSIZE: i32 = 996;

/// Login-related state transitions the plugin reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoginScreen,
    WorldHop,
    LoggedIn,
}

/// Host notifications, in the order the host dispatches them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A skill's absolute experience total changed
    SkillExperienceChanged { skill: Skill, total: i32 },

    /// Experience gained outside normal training (quest rewards, lamps)
    SyntheticDrop { skill: Skill, amount: i32 },

    SessionStateChanged(SessionState),

    /// A client script is about to run; `int_stack` holds its arguments
    ScriptPreFired { script_id: i32, int_stack: Vec<i32> },
}

/// Widget id argument of a native drop creation script, if this is one
pub fn native_drop_widget(script_id: i32, int_stack: &[i32]) -> Option<i32> {
    if script_id != XPDROPS_SETDROPSIZE {
        return None;
    }
    // The widget is the first of the script's four arguments
    int_stack
        .len()
        .checked_sub(4)
        .and_then(|idx| int_stack.get(idx))
        .copied()
}
