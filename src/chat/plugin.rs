//! Chat plugin wiring the feed, parser, and ingestion systems.
use bevy::prelude::*;

use super::{
    events::RawChatLineEvent,
    feed::ChatFeed,
    systems::{ingest_chat_lines, pump_chat_feed, ActiveChatParser},
};

pub struct ChatPlugin;

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChatFeed>()
            .init_resource::<ActiveChatParser>()
            .add_event::<RawChatLineEvent>()
            .add_systems(Update, (pump_chat_feed, ingest_chat_lines.after(pump_chat_feed)));

        info!("ChatPlugin registered");
    }
}
