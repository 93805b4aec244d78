//! Tests for the overlay frame loop
//!
//! A recording canvas captures every draw call so positions, colors and
//! skipped frames can be checked without a real graphics context.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tiny_skia::{Color, PixmapRef};
use xpdrops_core::events::HostEvent;
use xpdrops_core::host::{
    ActiveStyleQuery, AvatarProjection, IconBitmap, NativeDropWidgets, PlayerStats, ScreenPoint,
    SpriteLookup,
};
use xpdrops_core::plugin::XpDropsPlugin;
use xpdrops_core::skills::{SKILL_COUNT, Skill, SpriteId};
use xpdrops_core::style::Prayer;
use xpdrops_types::{AnimationConfig, FontConfig, XpDropsConfig};

use crate::canvas::Canvas;
use crate::overlay::XpDropOverlay;

const CHAR_WIDTH: f32 = 8.0;
const ASCENT: f32 = 12.0;

// ─────────────────────────────────────────────────────────────────────────────
// Fakes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
    Icon {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        opacity: f32,
    },
}

#[derive(Default)]
struct RecordingCanvas {
    font: Option<FontConfig>,
    draws: Vec<Draw>,
}

impl RecordingCanvas {
    fn texts(&self) -> Vec<(&str, f32, f32)> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                Draw::Icon { .. } => None,
            })
            .collect()
    }

    fn icons(&self) -> Vec<(f32, f32)> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Icon { x, y, .. } => Some((*x, *y)),
                Draw::Text { .. } => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, font: &FontConfig) {
        self.font = Some(font.clone());
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * CHAR_WIDTH
    }

    fn max_ascent(&mut self) -> f32 {
        ASCENT
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.draws.push(Draw::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }

    fn draw_icon(
        &mut self,
        _icon: PixmapRef<'_>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        opacity: f32,
    ) {
        self.draws.push(Draw::Icon {
            x,
            y,
            width,
            height,
            opacity,
        });
    }
}

struct Avatar {
    point: Mutex<Option<ScreenPoint>>,
}

impl Avatar {
    fn at(point: Option<ScreenPoint>) -> Arc<Self> {
        Arc::new(Self {
            point: Mutex::new(point),
        })
    }

    fn move_to(&self, point: Option<ScreenPoint>) {
        *self.point.lock().unwrap() = point;
    }
}

impl AvatarProjection for Avatar {
    fn logical_height(&self) -> Option<i32> {
        Some(100)
    }

    fn project_text_location(&self, _z_offset: i32) -> Option<ScreenPoint> {
        *self.point.lock().unwrap()
    }
}

struct FakeHost {
    experience: [i32; SKILL_COUNT],
    prayers: HashSet<Prayer>,
    sprites: HashSet<SpriteId>,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            experience: [1_000; SKILL_COUNT],
            prayers: HashSet::new(),
            // Attack and Strength only
            sprites: [197, 198].into_iter().collect(),
        }
    }

    fn gain(plugin: &mut XpDropsPlugin, host: &mut Self, skill: Skill, amount: i32) {
        host.experience[skill.ordinal()] += amount;
        plugin.on_skill_experience_changed(skill, host.experience[skill.ordinal()], &*host);
    }
}

impl ActiveStyleQuery for FakeHost {
    fn active_prayers(&self) -> HashSet<Prayer> {
        self.prayers.clone()
    }
}

impl PlayerStats for FakeHost {
    fn is_logged_in(&self) -> bool {
        true
    }

    fn skill_experiences(&self) -> [i32; SKILL_COUNT] {
        self.experience
    }
}

impl NativeDropWidgets for FakeHost {
    fn hide_widget(&mut self, _widget_id: i32) {}
}

impl SpriteLookup for FakeHost {
    fn sprite(&self, sprite_id: SpriteId) -> Option<IconBitmap> {
        self.sprites.contains(&sprite_id).then(|| IconBitmap {
            width: 10,
            height: 10,
            rgba: vec![255; 400],
        })
    }
}

fn config() -> XpDropsConfig {
    XpDropsConfig {
        animation: AnimationConfig {
            lifetime_frames: 20,
            fade_start_frames: 10,
            merge_window_frames: 5,
            jitter: 0.0,
            spawn_gap_frames: 0,
            ..AnimationConfig::default()
        },
        ..XpDropsConfig::default()
    }
}

fn setup(config: XpDropsConfig, avatar: Arc<Avatar>) -> (XpDropsPlugin, XpDropOverlay, FakeHost) {
    let host = FakeHost::new();
    let mut plugin = XpDropsPlugin::new(config.clone()).unwrap();
    let mut overlay = XpDropOverlay::new(&config, avatar);
    overlay.start_up(&mut plugin, &host);
    (plugin, overlay, host)
}

// ─────────────────────────────────────────────────────────────────────────────
// Drawing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fixed_box_draws_shadow_text_and_icon() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 1);

    // Default box: bottom center at (512, 200); "+40" is 24 wide
    assert_eq!(
        canvas.draws,
        vec![
            Draw::Text {
                text: "+40".to_string(),
                x: 501.0,
                y: 201.0,
                color: Color::from_rgba8(0, 0, 0, 255),
            },
            Draw::Text {
                text: "+40".to_string(),
                x: 500.0,
                y: 200.0,
                color: Color::from_rgba8(255, 255, 255, 255),
            },
            Draw::Icon {
                x: 486.0,
                y: 188.0,
                width: 12.0,
                height: 12.0,
                opacity: 1.0,
            },
        ]
    );
    assert_eq!(canvas.font, Some(FontConfig::default()));
}

#[test]
fn test_missing_icon_draws_text_only() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Woodcutting, 25);

    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut plugin, &mut host, &mut canvas);
    assert_eq!(canvas.texts().len(), 2);
    assert!(canvas.icons().is_empty());
}

#[test]
fn test_icons_hidden_by_config() {
    let config = XpDropsConfig {
        show_icons: false,
        ..config()
    };
    let (mut plugin, mut overlay, mut host) = setup(config, Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);

    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut plugin, &mut host, &mut canvas);
    assert!(canvas.icons().is_empty());
}

#[test]
fn test_grouped_icons_run_right_to_left() {
    let config = XpDropsConfig {
        animation: AnimationConfig {
            grouped: true,
            ..config().animation
        },
        ..config()
    };
    let (mut plugin, mut overlay, mut host) = setup(config, Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Strength, 40);
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 1);
    assert_eq!(canvas.texts()[1], ("+80", 500.0, 200.0));
    // Attack was promoted first so sits next to the text
    assert_eq!(canvas.icons(), vec![(486.0, 188.0), (472.0, 188.0)]);
}

#[test]
fn test_later_glyphs_draw_on_top() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Mining, 35);
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 4);

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 2);
    let order: Vec<&str> = canvas.texts().iter().map(|t| t.0).collect();
    assert_eq!(order, vec!["+4", "+4", "+35", "+35"]);
}

#[test]
fn test_finished_glyphs_are_not_drawn() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);

    let mut last = Vec::new();
    for _ in 0..=20 {
        let mut canvas = RecordingCanvas::default();
        last.push(overlay.render(&mut plugin, &mut host, &mut canvas));
    }
    assert!(last.iter().all(|&n| n == 1));

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 0);
    assert!(canvas.draws.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Skipped frames
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_projection_skips_frame() {
    let avatar = Avatar::at(None);
    let config = XpDropsConfig {
        attach_to_player: true,
        attach_offset_y: 20,
        ..config()
    };
    let (mut plugin, mut overlay, mut host) = setup(config, avatar.clone());
    FakeHost::gain(&mut plugin, &mut host, Skill::Strength, 40);

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 0);
    assert!(canvas.draws.is_empty());
    // Nothing was promoted either
    assert_eq!(plugin.queue().len(), 1);

    avatar.move_to(Some(ScreenPoint::new(300, 250)));
    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 1);
    assert_eq!(canvas.texts()[1], ("+40", 288.0, 230.0));
}

#[test]
fn test_inactive_overlay_draws_nothing() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);
    overlay.shut_down(&mut plugin);

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 0);
    assert!(canvas.draws.is_empty());
}

#[test]
fn test_channel_events_apply_while_frame_is_skipped() {
    let avatar = Avatar::at(None);
    let config = XpDropsConfig {
        attach_to_player: true,
        ..config()
    };
    let (mut plugin, mut overlay, mut host) = setup(config, avatar.clone());
    let sender = plugin.event_sender();
    sender
        .send(HostEvent::SyntheticDrop {
            skill: Skill::Attack,
            amount: 40,
        })
        .unwrap();

    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 0);
    assert_eq!(plugin.queue().len(), 1);

    avatar.move_to(Some(ScreenPoint::new(300, 250)));
    sender
        .send(HostEvent::SyntheticDrop {
            skill: Skill::Attack,
            amount: 2,
        })
        .unwrap();
    let mut canvas = RecordingCanvas::default();
    assert_eq!(overlay.render(&mut plugin, &mut host, &mut canvas), 1);
    assert!(plugin.queue().is_empty());
    assert_eq!(canvas.texts()[1], ("+42", 288.0, 250.0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Config changes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_anchor_swaps_at_runtime() {
    let avatar = Avatar::at(Some(ScreenPoint::new(300, 250)));
    let (mut plugin, mut overlay, mut host) = setup(config(), avatar);
    assert_eq!(overlay.anchor_provider().name(), "fixed_box");

    let change = overlay.apply_config(
        &mut plugin,
        XpDropsConfig {
            attach_to_player: true,
            ..config()
        },
    );
    assert!(change.anchor_changed);
    assert_eq!(overlay.anchor_provider().name(), "follow_player");

    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);
    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut plugin, &mut host, &mut canvas);
    assert_eq!(canvas.texts()[1], ("+40", 288.0, 250.0));
}

#[test]
fn test_moving_fixed_box_takes_effect() {
    let (mut plugin, mut overlay, mut host) = setup(config(), Avatar::at(None));
    let mut moved = config();
    moved.fixed_box.x = 0;
    moved.fixed_box.y = 0;
    overlay.apply_config(&mut plugin, moved);

    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);
    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut plugin, &mut host, &mut canvas);
    assert_eq!(canvas.texts()[1], ("+40", 20.0, 160.0));
}

#[test]
fn test_attach_offsets_take_effect_while_attached() {
    let avatar = Avatar::at(Some(ScreenPoint::new(300, 250)));
    let attached = XpDropsConfig {
        attach_to_player: true,
        ..config()
    };
    let (mut plugin, mut overlay, mut host) = setup(attached.clone(), avatar);

    let change = overlay.apply_config(
        &mut plugin,
        XpDropsConfig {
            attach_offset_x: 50,
            attach_offset_y: 20,
            ..attached
        },
    );
    assert!(!change.anchor_changed);

    FakeHost::gain(&mut plugin, &mut host, Skill::Attack, 40);
    let mut canvas = RecordingCanvas::default();
    overlay.render(&mut plugin, &mut host, &mut canvas);
    assert_eq!(canvas.texts()[1], ("+40", 338.0, 230.0));
}
