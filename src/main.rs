use bevy::prelude::*;

mod avatars;
mod bubbles;
mod chat;
mod core;
mod ui;
mod world;

use crate::{
    avatars::AvatarPlugin, bubbles::BubblePlugin, chat::ChatPlugin, core::CorePlugin,
    ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin,
            BubblePlugin,
            ChatPlugin, // After BubblePlugin so ingestion finds the scheduler
            WorldPlugin,
            AvatarPlugin,
            UiPlugin,
        ))
        .run();
}
