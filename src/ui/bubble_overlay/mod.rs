// src/ui/bubble_overlay/mod.rs
//
// Screen-space chat bubble overlay.
//
// Bubble nodes are UI elements that track avatar positions via camera
// projection. The overlay owns no display timing: every frame it asks the
// scheduler what should be visible and reconciles its nodes to match.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::BubbleOverlayPlugin;
