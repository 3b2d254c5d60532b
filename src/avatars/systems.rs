//! Systems spawning avatars and keeping the presence roster current.
use bevy::{math::primitives::Capsule3d, prelude::*};

use crate::bubbles::presence::PresenceRoster;

use super::components::{Avatar, IdleWander};

/// Spawns the named avatars the scripted chat feed talks through.
///
/// "Eve" appears in the feed but is deliberately not spawned here, so her
/// lines are dropped at the admission gate.
pub fn spawn_avatars(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let prototypes = [
        ("Alice", Color::srgb_u8(200, 90, 90), Vec3::new(4.0, 1.0, 2.0)),
        ("Bryn", Color::srgb_u8(90, 150, 210), Vec3::new(6.5, 1.0, -1.5)),
        ("Cedric", Color::srgb_u8(140, 200, 120), Vec3::new(3.0, 1.0, -4.0)),
    ];

    for (index, (name, color, position)) in prototypes.into_iter().enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.3, 1.0)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(position),
            Avatar::new(name),
            IdleWander::new(position, 1.5, index as f32 * 2.1),
            Name::new(name),
        ));

        info!("Spawned avatar '{}'", name);
    }
}

/// Drifts each avatar slowly around its spawn point.
pub fn idle_wander(time: Res<Time>, mut query: Query<(&IdleWander, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (wander, mut transform) in query.iter_mut() {
        let angle = wander.phase + elapsed * wander.speed;
        transform.translation = wander.origin
            + Vec3::new(angle.cos() * wander.radius, 0.0, angle.sin() * wander.radius);
    }
}

/// Rebuilds the presence roster from the avatars alive this frame.
pub fn refresh_presence_roster(
    avatars: Query<&Avatar>,
    mut roster: ResMut<PresenceRoster>,
) {
    roster.replace(avatars.iter().map(|avatar| avatar.display_name.clone()));
}
