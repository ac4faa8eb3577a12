// src/showcase/mod.rs

mod components;
mod library;
mod plugin;
mod systems;

// re-export the bits callers actually need:
pub use components::Pivot;
pub use plugin::ShowcasePlugin;
