// src/showcase/library.rs
//! Model library: name -> scene-asset path, loaded from a RON manifest.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------- Public plugin to register asset+loader ----------

pub struct ModelLibraryAssetPlugin;

impl Plugin for ModelLibraryAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<ModelLibrary>()
            .register_asset_loader(ModelLibraryLoader);
    }
}

// ---------- Model definition (data form) ----------

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelDef {
    /// Unique human-readable name (used for lookup).
    pub name: String,
    /// Scene asset path, e.g. "models/goblin.glb#Scene0".
    pub scene: String,
}

// ---------- Runtime library asset ----------

#[derive(Asset, TypePath, Clone, Debug)]
pub struct ModelLibrary {
    /// Ordered list; index in this vector is the lookup target.
    pub models: Vec<ModelDef>,
    /// Name → index for quick lookups.
    name_to_index: HashMap<String, u32>,
}

impl ModelLibrary {
    /// Names must be unique; duplicates are a manifest error.
    pub fn from_defs(defs: Vec<ModelDef>) -> Result<Self, ModelLibraryLoadError> {
        let mut name_to_index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if let Some(prev) = name_to_index.insert(def.name.clone(), i as u32) {
                return Err(ModelLibraryLoadError::DuplicateName {
                    name: def.name.clone(),
                    first: prev,
                    second: i as u32,
                });
            }
        }
        Ok(Self { models: defs, name_to_index })
    }

    /// Looks a model up by name; `None` is the one recognized failure
    /// ("asset not found") and callers are expected to skip and continue.
    pub fn scene_path(&self, name: &str) -> Option<&str> {
        self.name_to_index
            .get(name)
            .map(|&i| self.models[i as usize].scene.as_str())
    }
}

// ---------- Asset loader for `.library.ron` ----------

#[derive(Default)]
pub struct ModelLibraryLoader;

impl AssetLoader for ModelLibraryLoader {
    type Asset = ModelLibrary;
    type Settings = ();
    type Error = ModelLibraryLoadError;

    fn extensions(&self) -> &[&str] {
        &["library.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let defs: Vec<ModelDef> =
            ron::de::from_bytes(&bytes).map_err(|e| ModelLibraryLoadError::Ron(e.to_string()))?;
        ModelLibrary::from_defs(defs)
    }
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum ModelLibraryLoadError {
    #[error("I/O while reading model library: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Duplicate model name '{name}' (first idx {first}, second idx {second})")]
    DuplicateName { name: String, first: u32, second: u32 },
}
