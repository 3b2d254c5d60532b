//! Systems pumping the chat feed and ingesting lines into the scheduler.
use bevy::prelude::*;

use crate::bubbles::{presence::PresenceRoster, scheduler::BubbleScheduler};

use super::{events::RawChatLineEvent, feed::ChatFeed, parser::ChatLineParser};

/// Resource wrapper so the parser can be injected into systems.
#[derive(Resource, Debug, Default)]
pub struct ActiveChatParser(pub ChatLineParser);

/// Emits scripted chat lines on the feed's cadence.
pub fn pump_chat_feed(
    time: Res<Time>,
    mut feed: ResMut<ChatFeed>,
    mut writer: MessageWriter<RawChatLineEvent>,
) {
    for line in feed.tick(time.delta()) {
        writer.write(RawChatLineEvent::new(line));
    }
}

/// Parses raw lines and enqueues matches with the scheduler.
///
/// Lines matching no pattern are not errors; they simply never reach the
/// scheduler (join/leave notices, server broadcasts, and the like).
pub fn ingest_chat_lines(
    mut events: MessageReader<RawChatLineEvent>,
    parser: Res<ActiveChatParser>,
    roster: Res<PresenceRoster>,
    mut scheduler: ResMut<BubbleScheduler>,
) {
    for event in events.read() {
        let Some(message) = parser.0.parse(&event.line) else {
            debug!(target: "chat", "Unclassified chat line: {:?}", event.line);
            continue;
        };

        scheduler.enqueue(&message.speaker, message.body, &*roster);
    }
}
