//! Headless XP drop demo
//!
//! Run with: cargo run -p xpdrops-overlay -- [--config <file>] [--sprites <dir>] [--realtime]
//!
//! Drives the full pipeline with a scripted combat session and logs every
//! draw call. Set `RUST_LOG=debug` to see them.

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tiny_skia::{Color, PixmapRef};
use tracing_subscriber::EnvFilter;
use xpdrops_core::events::{HostEvent, SessionState};
use xpdrops_core::host::{
    ActiveStyleQuery, AvatarProjection, IconBitmap, NativeDropWidgets, PlayerStats, ScreenPoint,
    SpriteLookup,
};
use xpdrops_core::plugin::XpDropsPlugin;
use xpdrops_core::skills::{SKILL_COUNT, Skill, SpriteId};
use xpdrops_core::style::Prayer;
use xpdrops_core::{ConfigError, config};
use xpdrops_overlay::{Canvas, PngSpriteSource, XpDropOverlay};
use xpdrops_types::{FontConfig, XpDropsConfig};

const FRAMES: u32 = 300;
const FRAME_DURATION: Duration = Duration::from_millis(16);

// ─────────────────────────────────────────────────────────────────────────────
// Demo host
// ─────────────────────────────────────────────────────────────────────────────

/// Walks right across the screen, one pixel per frame
struct WalkingAvatar {
    position: Mutex<ScreenPoint>,
}

impl WalkingAvatar {
    fn step(&self) {
        if let Ok(mut position) = self.position.lock() {
            position.x += 1;
        }
    }
}

impl AvatarProjection for WalkingAvatar {
    fn logical_height(&self) -> Option<i32> {
        Some(98)
    }

    fn project_text_location(&self, z_offset: i32) -> Option<ScreenPoint> {
        let position = *self.position.lock().ok()?;
        Some(ScreenPoint::new(position.x, position.y - z_offset))
    }
}

struct DemoHost {
    experience: [i32; SKILL_COUNT],
    prayers: HashSet<Prayer>,
    sprites: Option<PngSpriteSource>,
}

impl ActiveStyleQuery for DemoHost {
    fn active_prayers(&self) -> HashSet<Prayer> {
        self.prayers.clone()
    }
}

impl PlayerStats for DemoHost {
    fn is_logged_in(&self) -> bool {
        true
    }

    fn skill_experiences(&self) -> [i32; SKILL_COUNT] {
        self.experience
    }
}

impl NativeDropWidgets for DemoHost {
    fn hide_widget(&mut self, widget_id: i32) {
        tracing::info!(widget_id, "Native drop hidden");
    }
}

impl SpriteLookup for DemoHost {
    fn sprite(&self, sprite_id: SpriteId) -> Option<IconBitmap> {
        self.sprites.as_ref()?.sprite(sprite_id)
    }
}

impl DemoHost {
    fn gain(&mut self, skill: Skill, amount: i32) -> HostEvent {
        let total = &mut self.experience[skill.ordinal()];
        *total += amount;
        HostEvent::SkillExperienceChanged {
            skill,
            total: *total,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tracing canvas
// ─────────────────────────────────────────────────────────────────────────────

/// Logs draw calls instead of painting. Text is measured with a fixed
/// advance per character.
struct TracingCanvas {
    font_size: f32,
}

impl Canvas for TracingCanvas {
    fn set_font(&mut self, font: &FontConfig) {
        self.font_size = font.size;
    }

    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * 0.5
    }

    fn max_ascent(&mut self) -> f32 {
        self.font_size * 0.75
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        tracing::debug!(text, x, y, alpha = color.alpha(), "draw_text");
    }

    fn draw_icon(
        &mut self,
        icon: PixmapRef<'_>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        opacity: f32,
    ) {
        tracing::debug!(
            source_width = icon.width(),
            x,
            y,
            width,
            height,
            opacity,
            "draw_icon"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry point
// ─────────────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // If XPDROPS_LOG_PATH is set, append to that file
    if let Ok(path) = env::var("XPDROPS_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

struct Args {
    config: Option<PathBuf>,
    sprites: Option<PathBuf>,
    realtime: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        sprites: None,
        realtime: false,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = iter.next().map(PathBuf::from),
            "--sprites" => args.sprites = iter.next().map(PathBuf::from),
            "--realtime" => args.realtime = true,
            other => tracing::warn!(arg = other, "Ignoring unknown argument"),
        }
    }
    args
}

fn load_config(path: Option<PathBuf>) -> Result<XpDropsConfig, ConfigError> {
    match path.or_else(config::default_config_path) {
        Some(path) => config::load_or_default(&path),
        None => Ok(XpDropsConfig::default()),
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    let config = load_config(args.config)?;

    let avatar = Arc::new(WalkingAvatar {
        position: Mutex::new(ScreenPoint::new(320, 360)),
    });
    let mut host = DemoHost {
        experience: [1_154; SKILL_COUNT],
        prayers: HashSet::new(),
        sprites: args.sprites.map(PngSpriteSource::new),
    };
    let mut plugin = XpDropsPlugin::new(config.clone())?;
    let mut overlay = XpDropOverlay::new(&config, avatar.clone());
    let mut canvas = TracingCanvas {
        font_size: config.font.size,
    };

    overlay.start_up(&mut plugin, &host);

    // Quest rewards arrive from another thread
    let sender = plugin.event_sender();
    let rewards = std::thread::spawn(move || {
        for (skill, amount) in [(Skill::Agility, 2_500), (Skill::Thieving, 25_000_000)] {
            if sender.send(HostEvent::SyntheticDrop { skill, amount }).is_err() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    });

    let mut drawn_total = 0;
    for frame in 0..FRAMES {
        match frame {
            // Melee kill with Piety on
            10 => {
                host.prayers.insert(Prayer::Piety);
                for (skill, amount) in [
                    (Skill::Strength, 160),
                    (Skill::Hitpoints, 53),
                    (Skill::Attack, 4),
                ] {
                    let event = host.gain(skill, amount);
                    plugin.handle_event(event, &mut host);
                }
            }
            // Native drop the client tries to show
            12 => plugin.handle_event(
                HostEvent::ScriptPreFired {
                    script_id: xpdrops_core::events::XPDROPS_SETDROPSIZE,
                    int_stack: vec![0x007a_0011, 0, 1, 2],
                },
                &mut host,
            ),
            // Rapid woodcutting gains merge into one glyph
            40..=44 => {
                let event = host.gain(Skill::Woodcutting, 25);
                plugin.handle_event(event, &mut host);
            }
            // Switch to following the player
            120 => {
                let mut edited = plugin.config().clone();
                edited.attach_to_player = true;
                edited.attach_offset_y = 30;
                overlay.apply_config(&mut plugin, edited);
            }
            140 => {
                let event = host.gain(Skill::Mining, 35);
                plugin.handle_event(event, &mut host);
            }
            // Hop worlds; everything on screen is dropped
            200 => {
                plugin.handle_event(
                    HostEvent::SessionStateChanged(SessionState::WorldHop),
                    &mut host,
                );
                plugin.handle_event(
                    HostEvent::SessionStateChanged(SessionState::LoggedIn),
                    &mut host,
                );
            }
            _ => {}
        }

        avatar.step();
        drawn_total += overlay.render(&mut plugin, &mut host, &mut canvas);

        if args.realtime {
            std::thread::sleep(FRAME_DURATION);
        }
    }

    if rewards.join().is_err() {
        tracing::warn!("Reward thread panicked");
    }
    overlay.shut_down(&mut plugin);
    tracing::info!(frames = FRAMES, glyphs_drawn = drawn_total, "Demo finished");
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run(parse_args()) {
        tracing::error!(error = %e, "Demo failed");
        std::process::exit(1);
    }
}
