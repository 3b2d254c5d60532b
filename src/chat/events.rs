//! Events carrying raw chat lines into the ingestion system.
use bevy::prelude::Message;

/// Fired once per raw chat line arriving from the feed.
#[derive(Message, Debug, Clone)]
pub struct RawChatLineEvent {
    pub line: String,
}

impl RawChatLineEvent {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}
