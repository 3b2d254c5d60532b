//! Avatar module exposing scene avatars and presence upkeep.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::AvatarPlugin;
