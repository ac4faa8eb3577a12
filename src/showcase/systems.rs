// src/showcase/systems.rs

use bevy::prelude::*;

use super::components::{Pivot, ShowcaseModels, Showpiece};
use super::library::ModelLibrary;
use super::plugin::{ModelLibraryHandle, ShowcaseSettings};

/// Runs once the model library is ready: spawns one model per pivot, in
/// pivot-index order. A pivot whose model name is not in the library is
/// skipped with a diagnostic; the rest still spawn.
pub fn spawn_showpieces(
    mut commands: Commands,
    settings: Res<ShowcaseSettings>,
    libraries: Res<Assets<ModelLibrary>>,
    handle: Res<ModelLibraryHandle>,
    asset_server: Res<AssetServer>,
    pivots: Query<(&Pivot, &Transform)>,
    mut models: ResMut<ShowcaseModels>,
    mut done: Local<bool>,
) {
    if *done { return; }
    let Some(library) = libraries.get(&handle.0) else { return };
    *done = true;

    let mut anchors: Vec<_> = pivots.iter().collect();
    anchors.sort_by_key(|(pivot, _)| pivot.index);
    let total = anchors.len();

    for (pivot, anchor) in anchors {
        let name = pivot.model.as_deref().unwrap_or(&settings.model_name);
        let Some(path) = library.scene_path(name) else {
            warn!(
                "Showcase: model '{}' not in library; skipping pivot {}",
                name, pivot.index
            );
            models.skipped += 1;
            continue;
        };

        let entity = commands
            .spawn((
                SceneRoot(asset_server.load(path)),
                Transform::from_translation(anchor.translation),
                Showpiece { spin_deg_per_sec: settings.spin_deg_per_sec },
                Name::new(format!("Showpiece {}", pivot.index)),
            ))
            .id();
        models.entities.push(entity);
    }

    info!("Showcase: spawned {} of {} pivots", models.entities.len(), total);
}

/// Spins every showpiece about +Y, scaled by elapsed time. The query only
/// yields live entities, so externally despawned models are simply no
/// longer visited.
pub fn spin_showpieces(
    time: Res<Time>,
    mut query: Query<(&Showpiece, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (piece, mut tf) in &mut query {
        tf.rotate_y((piece.spin_deg_per_sec * dt).to_radians());
    }
}
