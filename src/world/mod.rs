//! World module housing environment setup and camera controls.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
