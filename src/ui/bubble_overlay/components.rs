// src/ui/bubble_overlay/components.rs
//
// Components and resources for the screen-space chat bubble overlay.

use bevy::prelude::*;

/// Marker component for one speaker's bubble UI node.
///
/// Unlike a self-timed widget, a bubble node carries no lifetime of its
/// own: the scheduler decides visibility, the node only mirrors it.
#[derive(Component, Debug)]
pub struct BubbleNode {
    /// Display name this bubble belongs to.
    speaker: String,

    /// The avatar entity this bubble tracks in 3D space.
    avatar: Entity,

    /// Promotion stamp of the entry currently shown. When the scheduler
    /// reports a different stamp, the bubble's text is swapped in place.
    displayed_at: u64,
}

impl BubbleNode {
    pub fn new(speaker: impl Into<String>, avatar: Entity, displayed_at: u64) -> Self {
        Self {
            speaker: speaker.into(),
            avatar,
            displayed_at,
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn avatar(&self) -> Entity {
        self.avatar
    }

    pub fn displayed_at(&self) -> u64 {
        self.displayed_at
    }

    pub fn set_displayed_at(&mut self, displayed_at: u64) {
        self.displayed_at = displayed_at;
    }
}

/// Resource tracking the bubble node shown for each speaker.
#[derive(Resource, Debug, Default)]
pub struct BubbleTracker {
    pub by_speaker: std::collections::HashMap<String, Entity>,
}

/// Resource holding the full-screen overlay node bubbles are parented to.
#[derive(Resource, Debug)]
pub struct BubbleOverlayRoot(pub Entity);

/// Visibility weight for the pop-in/pop-out animation (0.0..=1.0).
///
/// Whichever edge of the display window is nearer drives the ramp: just
/// after promotion the elapsed time is smallest (popping in), just before
/// expiry the remaining time is (popping out).
pub fn pop_weight(elapsed_ms: u64, remaining_ms: u64, pop_ms: u64) -> f32 {
    if pop_ms == 0 {
        return 1.0;
    }
    let nearest = elapsed_ms.min(remaining_ms).min(pop_ms);
    nearest as f32 / pop_ms as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_weight_ramps_in_and_out() {
        assert_eq!(pop_weight(0, 5000, 200), 0.0);
        assert_eq!(pop_weight(100, 4900, 200), 0.5);
        assert_eq!(pop_weight(200, 4800, 200), 1.0);
        assert_eq!(pop_weight(2500, 2500, 200), 1.0);
        assert_eq!(pop_weight(4900, 100, 200), 0.5);
        assert_eq!(pop_weight(5000, 0, 200), 0.0);
    }

    #[test]
    fn zero_pop_window_disables_the_animation() {
        assert_eq!(pop_weight(0, 5000, 0), 1.0);
        assert_eq!(pop_weight(5000, 0, 0), 1.0);
    }
}
