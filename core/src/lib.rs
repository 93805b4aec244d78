pub mod config;
pub mod drops;
pub mod events;
pub mod host;
pub mod plugin;
pub mod skills;
pub mod style;


// Re-exports for convenience
pub use config::ConfigError;
pub use drops::{DropRecord, FINISHED_FRAME, InFlightDrop};
pub use events::{HostEvent, SessionState};
pub use host::{
    ActiveStyleQuery, AvatarProjection, HostClient, IconBitmap, NativeDropWidgets, PlayerStats,
    ScreenPoint, SpriteLookup,
};
pub use plugin::{ConfigChange, XpDropsPlugin};
pub use skills::{Skill, SpriteId};
pub use style::Prayer;
