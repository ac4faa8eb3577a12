use bevy::prelude::*;

/// An anchor point the showcase spawns a model at.
#[derive(Component)]
pub struct Pivot {
    /// Position in the spawn order (pivots form an ordered sequence).
    pub index: u32,
    /// Overrides `ShowcaseSettings::model_name` for this pivot only.
    pub model: Option<String>,
}

/// Marks a spawned model that spins about +Y every frame.
#[derive(Component)]
pub struct Showpiece {
    pub spin_deg_per_sec: f32,
}

/// Bookkeeping for the spawn pass. `entities` is append-only once the pass
/// has run; ids are never removed, even if the host despawns an entity.
#[derive(Resource, Default)]
pub struct ShowcaseModels {
    pub entities: Vec<Entity>,
    /// Pivots whose model name did not resolve in the library.
    pub skipped: usize,
}
