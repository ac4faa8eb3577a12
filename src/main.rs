use bevy::prelude::*;

mod setup;
mod showcase;

use showcase::ShowcasePlugin;

fn main() {
    App::new()
        // core engine plugins
        .add_plugins(DefaultPlugins)
        // spawns a model at each pivot and keeps them spinning
        .add_plugins(ShowcasePlugin)
        // camera, light, and the demo pivots
        .add_systems(Startup, setup::setup)
        .run();
}
