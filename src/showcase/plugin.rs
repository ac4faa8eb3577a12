//! Showcase plugin wiring (glue).
//! - Model library asset/loader
//! - Settings + spawned-model bookkeeping
//! - Spawn-once + spin-every-frame systems

use bevy::prelude::*;

use super::components::ShowcaseModels;
use super::library::{ModelLibrary, ModelLibraryAssetPlugin};
use super::systems::{spawn_showpieces, spin_showpieces};

/// Configure where the model library manifest lives, which model each pivot
/// shows by default, and how fast spawned models spin.
#[derive(Resource, Clone)]
pub struct ShowcaseSettings {
    pub library_path: String,
    pub model_name: String,
    pub spin_deg_per_sec: f32,
}
impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            library_path: "models/showcase.library.ron".to_string(),
            model_name: "mon_goblinWizard".to_string(),
            spin_deg_per_sec: 10.0,
        }
    }
}

/// Handle to the loaded ModelLibrary asset.
#[derive(Resource, Default)]
pub struct ModelLibraryHandle(pub Handle<ModelLibrary>);

pub struct ShowcasePlugin;
impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ModelLibraryAssetPlugin)
            .init_resource::<ShowcaseSettings>()
            .init_resource::<ModelLibraryHandle>()
            .init_resource::<ShowcaseModels>()
            .add_systems(Startup, load_library)
            .add_systems(
                Update,
                (spawn_showpieces, spin_showpieces.after(spawn_showpieces)),
            );
    }
}

/// Startup: request loading the library manifest, store handle.
fn load_library(
    mut handle_res: ResMut<ModelLibraryHandle>,
    settings: Res<ShowcaseSettings>,
    assets: Res<AssetServer>,
) {
    if handle_res.0.is_strong() { return; }
    let h: Handle<ModelLibrary> = assets.load(settings.library_path.as_str());
    handle_res.0 = h;
    info!(
        "Showcase: loading model library from '{}', default model '{}'",
        settings.library_path, settings.model_name
    );
}
