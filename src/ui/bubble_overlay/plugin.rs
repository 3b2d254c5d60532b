// src/ui/bubble_overlay/plugin.rs
//
// Plugin registration for the bubble overlay systems.

use bevy::prelude::*;

use super::components::BubbleTracker;
use super::systems::{place_bubbles, setup_bubble_overlay_root, sync_bubbles};

/// Plugin mirroring the bubble scheduler into screen-space UI.
///
/// # System Ordering
///
/// 1. `sync_bubbles` - Polls the scheduler per avatar; spawns/retexts/despawns nodes
/// 2. `place_bubbles` - Projects avatar positions to the viewport, applies pop alpha
///
/// # Dependencies
///
/// - `BubblePlugin` must be registered before this plugin (provides the scheduler and config)
/// - `AvatarPlugin` must be registered (provides avatar entities)
/// - `WorldPlugin` must be registered (provides FlyCamera for projection)
pub struct BubbleOverlayPlugin;

impl Plugin for BubbleOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BubbleTracker>()
            .add_systems(Startup, setup_bubble_overlay_root)
            .add_systems(Update, (sync_bubbles, place_bubbles.after(sync_bubbles)));

        info!("BubbleOverlayPlugin registered");
    }
}
