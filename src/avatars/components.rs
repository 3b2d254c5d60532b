//! Components for player avatars in the scene.
use bevy::prelude::*;

/// A player avatar, identified by the display name chat attributes lines to.
#[derive(Component, Debug, Clone)]
pub struct Avatar {
    pub display_name: String,
}

impl Avatar {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Idle wander state: a slow drift around the spawn point.
#[derive(Component, Debug, Clone)]
pub struct IdleWander {
    pub origin: Vec3,
    pub radius: f32,
    pub phase: f32,
    pub speed: f32,
}

impl IdleWander {
    pub fn new(origin: Vec3, radius: f32, phase: f32) -> Self {
        Self {
            origin,
            radius,
            phase,
            speed: 0.25,
        }
    }
}
