//! In-flight drop animation
//!
//! The animator owns every glyph currently on screen. Once per render tick
//! it promotes a bounded number of queued drops (merging them into open
//! glyphs where possible), advances each glyph's easing state, and retires
//! glyphs whose lifetime has run out.
//!
//! # Lifecycle of a glyph
//!
//! ```text
//! spawn (frame 0) ──tick──▶ frame 1 … lifetime ──tick──▶ FINISHED ──tick──▶ removed
//!        └─ open for merging while frame < merge_window
//! ```
//!
//! A glyph at `frame == lifetime` is drawn one last time at alpha 0. The next
//! tick marks it [`FINISHED_FRAME`] so the renderer skips it, and the tick
//! after that drops it from the list. Marking instead of removing keeps the
//! list stable while the renderer iterates it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xpdrops_types::{AnimationConfig, DropStyle};

use crate::skills::Skill;

use super::{DropQueue, DropRecord};

/// Frame value of a glyph that has finished and awaits removal
pub const FINISHED_FRAME: i32 = -1;

const OPAQUE: f32 = 255.0;

/// A glyph on screen: one or more merged drops and their animation state
#[derive(Debug, Clone, PartialEq)]
pub struct InFlightDrop {
    /// Ticks since spawn, or [`FINISHED_FRAME`]
    pub frame: i32,
    /// Summed amount of every merged drop
    pub amount: i64,
    pub style: DropStyle,
    /// Distinct contributing skills in arrival order
    pub icons: Vec<Skill>,
    /// Horizontal jitter, fixed at spawn
    pub x_offset: f32,
    /// Vertical travel so far, negative is up
    pub y_offset: f32,
    /// 0 (invisible) to 255 (opaque)
    pub alpha: f32,
    /// Number of drops merged into this glyph
    pub hits: u32,
}

impl InFlightDrop {
    fn spawn(record: DropRecord, x_offset: f32) -> Self {
        Self {
            frame: 0,
            amount: i64::from(record.amount),
            style: record.style,
            icons: vec![record.skill],
            x_offset,
            y_offset: 0.0,
            alpha: OPAQUE,
            hits: 1,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame < 0
    }

    /// Still accepting merges
    pub fn is_open(&self, merge_window: u32) -> bool {
        u32::try_from(self.frame).is_ok_and(|frame| frame < merge_window)
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.icons.contains(&skill)
    }

    fn absorb(&mut self, record: DropRecord) {
        self.amount += i64::from(record.amount);
        self.hits += 1;
        if !self.has_skill(record.skill) {
            self.icons.push(record.skill);
        }
        // Only grouped glyphs can receive a record of another style
        if self.style == DropStyle::Default {
            self.style = record.style;
        }
    }

    fn advance(&mut self, config: &AnimationConfig) {
        let Ok(frame) = u32::try_from(self.frame) else {
            return;
        };
        let lifetime = config.lifetime_frames;
        if frame > lifetime {
            self.frame = FINISHED_FRAME;
            self.alpha = 0.0;
            return;
        }

        let progress = frame as f32 / lifetime.max(1) as f32;
        self.y_offset = -config.travel_distance * ease_out_cubic(progress);
        self.alpha = fade_alpha(frame, config.fade_start_frames, lifetime);
        self.frame += 1;
    }
}

/// Fast rise that settles towards the end
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Opaque until `fade_start`, then linear down to 0 at `lifetime`
fn fade_alpha(frame: u32, fade_start: u32, lifetime: u32) -> f32 {
    if frame >= lifetime {
        return 0.0;
    }
    if frame < fade_start {
        return OPAQUE;
    }
    let remaining = (lifetime - frame) as f32;
    let span = (lifetime - fade_start) as f32;
    OPAQUE * remaining / span
}

/// Owns the in-flight glyphs and drives them once per tick
#[derive(Debug)]
pub struct DropAnimator {
    config: AnimationConfig,
    drops: Vec<InFlightDrop>,
    rng: StdRng,
}

impl DropAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        let config = sanitize(config);
        let rng = StdRng::seed_from_u64(config.jitter_seed);
        Self {
            config,
            drops: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Swap tunables. Glyphs already on screen continue with the new values.
    pub fn set_config(&mut self, config: AnimationConfig) {
        let config = sanitize(config);
        if config.jitter_seed != self.config.jitter_seed {
            self.rng = StdRng::seed_from_u64(config.jitter_seed);
        }
        self.config = config;
    }

    /// Every glyph in draw order, including ones marked finished
    pub fn drops(&self) -> &[InFlightDrop] {
        &self.drops
    }

    /// Glyphs the renderer should draw this tick
    pub fn visible(&self) -> impl Iterator<Item = &InFlightDrop> {
        self.drops.iter().filter(|d| !d.is_finished())
    }

    pub fn clear(&mut self) {
        self.drops.clear();
    }

    /// Run one render tick against the pending queue
    pub fn tick(&mut self, queue: &mut DropQueue) -> &[InFlightDrop] {
        self.drops.retain(|d| !d.is_finished());
        self.promote(queue);

        let config = &self.config;
        for drop in &mut self.drops {
            drop.advance(config);
        }
        &self.drops
    }

    fn promote(&mut self, queue: &mut DropQueue) {
        for _ in 0..self.config.max_promotions_per_tick {
            let Some((skill, style)) = queue.peek().map(|r| (r.skill, r.style)) else {
                break;
            };

            if let Some(idx) = self.merge_target(skill, style) {
                let Some(record) = queue.pop() else { break };
                tracing::debug!(skill = %record.skill, amount = record.amount, "Merging drop");
                self.drops[idx].absorb(record);
                continue;
            }

            // Stop at the first drop that cannot go anywhere so the queue
            // order is preserved for the next tick
            if !self.can_spawn() {
                break;
            }
            let Some(record) = queue.pop() else { break };
            tracing::debug!(skill = %record.skill, amount = record.amount, "Spawning drop");
            let x_offset = self.next_jitter();
            self.drops.push(InFlightDrop::spawn(record, x_offset));
        }
    }

    fn merge_target(&self, skill: Skill, style: DropStyle) -> Option<usize> {
        let window = self.config.merge_window_frames;
        if self.config.grouped {
            // Frame 0 means spawned earlier in this promotion pass
            let idx = self.newest_live()?;
            let drop = &self.drops[idx];
            return (drop.frame == 0 || drop.is_open(window)).then_some(idx);
        }
        self.drops
            .iter()
            .rposition(|d| d.is_open(window) && d.has_skill(skill) && d.style == style)
    }

    fn newest_live(&self) -> Option<usize> {
        self.drops.iter().rposition(|d| !d.is_finished())
    }

    fn can_spawn(&self) -> bool {
        self.newest_live().is_none_or(|idx| {
            u32::try_from(self.drops[idx].frame)
                .is_ok_and(|frame| frame >= self.config.spawn_gap_frames)
        })
    }

    fn next_jitter(&mut self) -> f32 {
        let jitter = self.config.jitter.abs();
        if jitter > 0.0 {
            self.rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        }
    }
}

/// Longest lifetime a glyph's `i32` frame counter can reach
const MAX_LIFETIME_FRAMES: u32 = i32::MAX as u32 - 1;

fn sanitize(mut config: AnimationConfig) -> AnimationConfig {
    if config.lifetime_frames > MAX_LIFETIME_FRAMES {
        tracing::warn!(
            lifetime = config.lifetime_frames,
            max = MAX_LIFETIME_FRAMES,
            "Lifetime too long, clamping"
        );
        config.lifetime_frames = MAX_LIFETIME_FRAMES;
    }
    if config.fade_start_frames > config.lifetime_frames {
        tracing::warn!(
            fade_start = config.fade_start_frames,
            lifetime = config.lifetime_frames,
            "Fade start after lifetime, clamping"
        );
        config.fade_start_frames = config.lifetime_frames;
    }
    if config.merge_window_frames > config.lifetime_frames {
        tracing::warn!(
            merge_window = config.merge_window_frames,
            lifetime = config.lifetime_frames,
            "Merge window longer than lifetime, clamping"
        );
        config.merge_window_frames = config.lifetime_frames;
    }
    if config.max_promotions_per_tick == 0 {
        tracing::warn!("max_promotions_per_tick is 0, using 1");
        config.max_promotions_per_tick = 1;
    }
    if !config.travel_distance.is_finite() {
        config.travel_distance = AnimationConfig::default().travel_distance;
    }
    if !config.jitter.is_finite() {
        config.jitter = 0.0;
    }
    config
}
