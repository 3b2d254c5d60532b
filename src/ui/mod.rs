// src/ui/mod.rs
//
// UI module providing the screen-space chat bubble overlay.

pub mod bubble_overlay;

// Re-export the main plugin
pub use bubble_overlay::BubbleOverlayPlugin as UiPlugin;
