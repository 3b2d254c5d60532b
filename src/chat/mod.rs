//! Chat module hosting line parsing, the scripted feed, and ingestion.
pub mod events;
pub mod feed;
pub mod parser;
pub mod plugin;
pub mod systems;

pub use plugin::ChatPlugin;
