//! Plugin controller
//!
//! `XpDropsPlugin` owns the whole drop pipeline: the admission rules, the
//! last-known experience table, the pending queue and the animator. The host
//! feeds it events either directly through [`XpDropsPlugin::handle_event`]
//! or, from other threads, through the channel returned by
//! [`XpDropsPlugin::event_sender`]. Channel events are applied at the start
//! of the next tick, so every piece of state keeps a single owner.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use xpdrops_types::XpDropsConfig;

use crate::config::ConfigError;
use crate::drops::{
    Admission, DropAnimator, DropQueue, ExperienceTable, InFlightDrop, SkillFilter,
};
use crate::events::{HostEvent, SessionState, native_drop_widget};
use crate::host::{ActiveStyleQuery, HostClient, NativeDropWidgets, PlayerStats};
use crate::skills::{PriorityTable, STANDARD_SKILL_ICONS, Skill, SkillIconTable, SpriteId};

/// What a config update touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigChange {
    /// `attach_to_player` flipped; the overlay must swap anchor providers
    pub anchor_changed: bool,
    pub filter_changed: bool,
    pub animation_changed: bool,
}

pub struct XpDropsPlugin {
    config: XpDropsConfig,
    admission: Admission,
    experience: ExperienceTable,
    queue: DropQueue,
    animator: DropAnimator,
    icons: SkillIconTable,
    active: bool,
    events_tx: UnboundedSender<HostEvent>,
    events_rx: UnboundedReceiver<HostEvent>,
}

impl XpDropsPlugin {
    /// Create an inactive plugin with the standard priority and icon tables
    pub fn new(config: XpDropsConfig) -> Result<Self, ConfigError> {
        Self::with_tables(config, PriorityTable::default(), &STANDARD_SKILL_ICONS)
    }

    /// Create an inactive plugin with custom tables. Fails if the icon table
    /// does not cover every skill.
    pub fn with_tables(
        config: XpDropsConfig,
        priorities: PriorityTable,
        icons: &[(Skill, SpriteId)],
    ) -> Result<Self, ConfigError> {
        let icons = SkillIconTable::new(icons)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            admission: Admission::new(SkillFilter::from_csv(&config.skills_to_filter)),
            experience: ExperienceTable::new(),
            queue: DropQueue::new(priorities),
            animator: DropAnimator::new(config.animation.clone()),
            icons,
            active: false,
            events_tx,
            events_rx,
            config,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Activate the overlay. Pending and in-flight drops from any earlier
    /// activation are discarded.
    pub fn start_up<P: PlayerStats + ?Sized>(&mut self, host: &P) {
        self.queue.clear();
        self.animator.clear();
        if host.is_logged_in() {
            self.experience.resync(&host.skill_experiences());
        } else {
            self.experience.reset();
        }
        self.active = true;
        tracing::info!(
            attach_to_player = self.config.attach_to_player,
            logged_in = host.is_logged_in(),
            "XP drop overlay started"
        );
    }

    pub fn shut_down(&mut self) {
        self.active = false;
        self.queue.clear();
        self.animator.clear();
        tracing::info!("XP drop overlay stopped");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &XpDropsConfig {
        &self.config
    }

    /// Apply an edited config and report which parts changed
    pub fn apply_config(&mut self, config: XpDropsConfig) -> ConfigChange {
        let change = ConfigChange {
            anchor_changed: config.attach_to_player != self.config.attach_to_player,
            filter_changed: config.skills_to_filter != self.config.skills_to_filter,
            animation_changed: config.animation != self.config.animation,
        };

        if change.filter_changed {
            self.admission
                .set_filter(SkillFilter::from_csv(&config.skills_to_filter));
            tracing::info!(filter = %config.skills_to_filter, "Reloaded skill filter");
        }
        if change.animation_changed {
            self.animator.set_config(config.animation.clone());
        }
        if change.anchor_changed {
            tracing::info!(
                attach_to_player = config.attach_to_player,
                "Drop anchor changed"
            );
        }

        self.config = config;
        change
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Sender for hosts that dispatch callbacks off the render thread
    pub fn event_sender(&self) -> UnboundedSender<HostEvent> {
        self.events_tx.clone()
    }

    /// Apply one host event immediately. Ignored while inactive.
    pub fn handle_event<H: HostClient + ?Sized>(&mut self, event: HostEvent, host: &mut H) {
        if !self.active {
            return;
        }
        match event {
            HostEvent::SkillExperienceChanged { skill, total } => {
                self.on_skill_experience_changed(skill, total, &*host);
            }
            HostEvent::SyntheticDrop { skill, amount } => {
                self.on_synthetic_drop(skill, amount, &*host);
            }
            HostEvent::SessionStateChanged(state) => {
                self.on_session_state_changed(state, &*host);
            }
            HostEvent::ScriptPreFired {
                script_id,
                int_stack,
            } => {
                self.on_script_pre_fired(script_id, &int_stack, host);
            }
        }
    }

    pub fn on_skill_experience_changed<S: ActiveStyleQuery + ?Sized>(
        &mut self,
        skill: Skill,
        total: i32,
        styles: &S,
    ) {
        if let Some(record) =
            self.admission
                .admit_stat_change(&mut self.experience, skill, total, styles)
        {
            self.queue.push(record);
        }
    }

    pub fn on_synthetic_drop<S: ActiveStyleQuery + ?Sized>(
        &mut self,
        skill: Skill,
        amount: i32,
        styles: &S,
    ) {
        if let Some(record) = self.admission.admit_synthetic(skill, amount, styles) {
            self.queue.push(record);
        }
    }

    pub fn on_session_state_changed<P: PlayerStats + ?Sized>(
        &mut self,
        state: SessionState,
        host: &P,
    ) {
        match state {
            SessionState::LoginScreen | SessionState::WorldHop => {
                self.experience.reset();
                self.queue.clear();
                self.animator.clear();
                tracing::info!(?state, "Session boundary, cleared drops and experience");
            }
            SessionState::LoggedIn => {
                self.experience.resync(&host.skill_experiences());
                tracing::info!("Logged in, experience baseline resynced");
            }
        }
    }

    /// Hide the client's own drop so only ours is visible
    pub fn on_script_pre_fired<W: NativeDropWidgets + ?Sized>(
        &mut self,
        script_id: i32,
        int_stack: &[i32],
        widgets: &mut W,
    ) {
        if let Some(widget_id) = native_drop_widget(script_id, int_stack) {
            tracing::debug!(widget_id, "Hiding native XP drop");
            widgets.hide_widget(widget_id);
        }
    }

    /// Apply every event waiting in the channel
    pub fn pump_events<H: HostClient + ?Sized>(&mut self, host: &mut H) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event, host);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tick
    // ─────────────────────────────────────────────────────────────────────────

    /// Run one render tick and return the glyphs in draw order. Glyphs with
    /// a negative frame are finished and must not be drawn.
    pub fn tick<H: HostClient + ?Sized>(&mut self, host: &mut H) -> &[InFlightDrop] {
        self.pump_events(host);
        if !self.active {
            return &[];
        }
        self.animator.tick(&mut self.queue)
    }

    pub fn drops(&self) -> &[InFlightDrop] {
        self.animator.drops()
    }

    pub fn queue(&self) -> &DropQueue {
        &self.queue
    }

    pub fn experience(&self) -> &ExperienceTable {
        &self.experience
    }

    pub fn icon_table(&self) -> &SkillIconTable {
        &self.icons
    }
}
