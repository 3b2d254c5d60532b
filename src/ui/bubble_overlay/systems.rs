// src/ui/bubble_overlay/systems.rs
//
// Systems mirroring the bubble scheduler's verdict into screen-space UI.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::avatars::components::Avatar;
use crate::bubbles::config::BubbleConfig;
use crate::bubbles::scheduler::BubbleScheduler;
use crate::core::ChatClock;
use crate::world::components::FlyCamera;

use super::components::{pop_weight, BubbleNode, BubbleOverlayRoot, BubbleTracker};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.95, 0.95, 0.95, 0.9);
const TEXT_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);

/// Set up the UI root node that holds all chat bubbles.
pub fn setup_bubble_overlay_root(mut commands: Commands) {
    let root = commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .insert(ZIndex(100)) // Render on top of other UI
        .insert(BackgroundColor(Color::NONE))
        .id();

    commands.insert_resource(BubbleOverlayRoot(root));
    info!("Bubble overlay root created");
}

/// Poll the scheduler for every avatar and reconcile bubble nodes.
///
/// The scheduler is the single authority on what is visible: a hit spawns
/// or retexts the speaker's node, a miss despawns it. Promotion and expiry
/// both happen inside the query call, driven by the shared chat clock.
#[allow(clippy::too_many_arguments)] // System function requires all arguments
pub fn sync_bubbles(
    mut commands: Commands,
    clock: Res<ChatClock>,
    config: Res<BubbleConfig>,
    mut scheduler: ResMut<BubbleScheduler>,
    mut tracker: ResMut<BubbleTracker>,
    avatar_query: Query<(Entity, &Avatar)>,
    mut bubble_query: Query<&mut BubbleNode>,
    root: Option<Res<BubbleOverlayRoot>>,
) {
    let Some(root) = root else {
        return; // Overlay root not set up yet
    };

    let now_ms = clock.now_ms();

    for (avatar_entity, avatar) in avatar_query.iter() {
        let speaker = avatar.display_name.as_str();
        let verdict = scheduler
            .query(speaker, now_ms)
            .map(|active| (active.body.to_owned(), active.displayed_at));

        match verdict {
            Some((body, displayed_at)) => {
                if let Some(&node_entity) = tracker.by_speaker.get(speaker) {
                    let Ok(mut node) = bubble_query.get_mut(node_entity) else {
                        continue;
                    };
                    // Same speaker, next entry: swap the text in place.
                    if node.displayed_at() != displayed_at {
                        node.set_displayed_at(displayed_at);
                        commands.entity(node_entity).insert(Text::new(body));
                    }
                    continue;
                }

                let node_entity = commands
                    .spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            max_width: Val::Px(config.overlay.max_width_px),
                            padding: UiRect::all(Val::Px(config.overlay.padding_px)),
                            display: Display::None, // Positioned by the placement system
                            ..default()
                        },
                        BackgroundColor(BACKGROUND_COLOR),
                        ZIndex(101),
                        BubbleNode::new(speaker, avatar_entity, displayed_at),
                        Text::new(body),
                        TextFont {
                            font_size: config.overlay.font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ))
                    .id();

                commands.entity(root.0).add_child(node_entity);
                tracker.by_speaker.insert(speaker.to_owned(), node_entity);
            }
            None => {
                if let Some(node_entity) = tracker.by_speaker.remove(speaker) {
                    commands.entity(node_entity).despawn();
                }
            }
        }
    }
}

/// Position bubble nodes over their avatars and apply the pop animation.
///
/// Projects each avatar's head position into the viewport, culls bubbles
/// beyond the configured camera distance, and ramps alpha near both edges
/// of the display window.
pub fn place_bubbles(
    mut commands: Commands,
    clock: Res<ChatClock>,
    config: Res<BubbleConfig>,
    mut tracker: ResMut<BubbleTracker>,
    camera_query: Query<(&Camera, &GlobalTransform), With<FlyCamera>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    avatar_transforms: Query<&GlobalTransform, With<Avatar>>,
    mut bubble_query: Query<(
        Entity,
        &BubbleNode,
        &mut Node,
        &mut BackgroundColor,
        &mut TextColor,
    )>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return; // No camera, can't position bubbles
    };

    let Ok(window) = window_query.single() else {
        return; // No window, can't get screen dimensions
    };

    let window_height = window.resolution.height();
    let max_distance_sq =
        config.overlay.max_display_distance * config.overlay.max_display_distance;
    let now_ms = clock.now_ms();
    let duration_ms = config.display.duration_ms;

    for (entity, bubble, mut style, mut background, mut text_color) in bubble_query.iter_mut() {
        let Ok(avatar_transform) = avatar_transforms.get(bubble.avatar()) else {
            // Avatar entity no longer exists
            tracker.by_speaker.remove(bubble.speaker());
            commands.entity(entity).despawn();
            continue;
        };

        let mut world_position = avatar_transform.translation();
        world_position.y += config.overlay.vertical_offset;

        let to_camera = camera_transform.translation() - world_position;
        if to_camera.length_squared() > max_distance_sq {
            style.display = Display::None;
            continue;
        }

        let Ok(viewport_position) = camera.world_to_viewport(camera_transform, world_position)
        else {
            // Avatar is behind the camera or outside the frustum
            style.display = Display::None;
            continue;
        };

        // UI origin is top-left, so flip Y
        style.display = Display::Flex;
        style.left = Val::Px(viewport_position.x);
        style.top = Val::Px(window_height - viewport_position.y);

        let elapsed_ms = now_ms.saturating_sub(bubble.displayed_at());
        let remaining_ms = duration_ms.saturating_sub(elapsed_ms);
        let alpha = pop_weight(elapsed_ms, remaining_ms, config.display.pop_ms);
        text_color.0 = TEXT_COLOR.with_alpha(alpha);
        background.0 = BACKGROUND_COLOR.with_alpha(alpha * 0.9);
    }
}
