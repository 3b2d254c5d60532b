//! Core module hosting the shared chat clock.
pub mod plugin;

pub use plugin::{ChatClock, CorePlugin};
