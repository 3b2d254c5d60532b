//! Avatar plugin wiring spawning, wander, and roster refresh.
use bevy::prelude::*;

use crate::chat::systems::ingest_chat_lines;

use super::systems::{idle_wander, refresh_presence_roster, spawn_avatars};

pub struct AvatarPlugin;

impl Plugin for AvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_avatars).add_systems(
            Update,
            (
                idle_wander,
                // Roster must reflect this frame's avatars before chat
                // admission runs.
                refresh_presence_roster.before(ingest_chat_lines),
            ),
        );
    }
}
