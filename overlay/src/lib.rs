//! Anchor providers, renderer and overlay glue for XP drops
//!
//! The core crate decides which drops exist and where they are in their
//! animation. This crate decides where on screen that is and paints it
//! through a host-supplied [`Canvas`].

pub mod anchor;
pub mod canvas;
pub mod icons;
pub mod overlay;
pub mod renderer;
pub mod utils;

#[cfg(test)]
mod overlay_tests;

pub use anchor::{Anchor, AnchorProvider, FixedBoxAnchor, FollowPlayerAnchor, MAX_AVATAR_TEXT_Z};
pub use canvas::Canvas;
pub use icons::{IconCache, IconError, PngSpriteSource};
pub use overlay::XpDropOverlay;
pub use renderer::DropRenderer;
