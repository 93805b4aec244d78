//! The XP drop overlay
//!
//! Ties one tick of the plugin to one paint: resolve the anchor, advance
//! the animator, draw. The anchor provider can be swapped at runtime when
//! `attach_to_player` changes; the renderer and its icon cache survive.

use std::sync::Arc;

use xpdrops_core::host::{AvatarProjection, HostClient, PlayerStats, SpriteLookup};
use xpdrops_core::plugin::{ConfigChange, XpDropsPlugin};
use xpdrops_types::XpDropsConfig;

use crate::anchor::{AnchorProvider, provider_for};
use crate::canvas::Canvas;
use crate::renderer::DropRenderer;

pub struct XpDropOverlay {
    anchor: Box<dyn AnchorProvider>,
    avatar: Arc<dyn AvatarProjection + Send + Sync>,
    renderer: DropRenderer,
}

impl XpDropOverlay {
    /// Create an overlay using the anchor variant `config` selects
    pub fn new(config: &XpDropsConfig, avatar: Arc<dyn AvatarProjection + Send + Sync>) -> Self {
        Self {
            anchor: provider_for(config, &avatar),
            avatar,
            renderer: DropRenderer::new(),
        }
    }

    pub fn anchor_provider(&self) -> &dyn AnchorProvider {
        self.anchor.as_ref()
    }

    /// Replace the anchor provider without touching the renderer
    pub fn set_anchor_provider(&mut self, provider: Box<dyn AnchorProvider>) {
        tracing::info!(
            from = self.anchor.name(),
            to = provider.name(),
            "Switched drop anchor"
        );
        self.anchor = provider;
    }

    pub fn renderer(&self) -> &DropRenderer {
        &self.renderer
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Activate the plugin and pick the anchor for its current config
    pub fn start_up<P: PlayerStats + ?Sized>(&mut self, plugin: &mut XpDropsPlugin, host: &P) {
        plugin.start_up(host);
        self.anchor = provider_for(plugin.config(), &self.avatar);
    }

    pub fn shut_down(&mut self, plugin: &mut XpDropsPlugin) {
        plugin.shut_down();
    }

    /// Apply a config edit. The anchor is rebuilt every time so box geometry
    /// and attach offsets take effect immediately.
    pub fn apply_config(
        &mut self,
        plugin: &mut XpDropsPlugin,
        config: XpDropsConfig,
    ) -> ConfigChange {
        let change = plugin.apply_config(config);
        let provider = provider_for(plugin.config(), &self.avatar);
        if change.anchor_changed {
            self.set_anchor_provider(provider);
        } else {
            self.anchor = provider;
        }
        change
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame
    // ─────────────────────────────────────────────────────────────────────────

    /// Run one frame. Pending channel events are always applied; animation
    /// only advances and draws when the overlay is active and has an
    /// anchor. Returns the number of glyphs drawn.
    pub fn render<H, C>(&mut self, plugin: &mut XpDropsPlugin, host: &mut H, canvas: &mut C) -> usize
    where
        H: HostClient + SpriteLookup + ?Sized,
        C: Canvas + ?Sized,
    {
        let Some(anchor) = self.anchor.compute_anchor() else {
            plugin.pump_events(host);
            return 0;
        };

        // Drains the event channel before promoting
        plugin.tick(host);
        if !plugin.is_active() {
            return 0;
        }
        self.renderer.render(
            canvas,
            anchor,
            plugin.drops(),
            plugin.config(),
            plugin.icon_table(),
            &*host,
        )
    }
}
