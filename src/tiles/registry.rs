use super::types::TileKind;
use crate::editor::EditorError;
use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

/// Loaded tile images, looked up by tile kind at draw time
#[derive(Resource, Debug, Default)]
pub struct TileAtlas {
    images: HashMap<TileKind, Handle<Image>>,
}

impl TileAtlas {
    /// Request every tile image from the asset server
    pub fn load_all(asset_server: &AssetServer) -> Self {
        let mut atlas = Self::default();
        for kind in TileKind::ALL {
            info!("Loading tile image '{}' from {}", kind.asset_key(), kind.asset_path());
            atlas.insert(kind, asset_server.load(kind.asset_path()));
        }
        atlas
    }

    pub fn insert(&mut self, kind: TileKind, handle: Handle<Image>) {
        self.images.insert(kind, handle);
    }

    pub fn get(&self, kind: TileKind) -> Option<&Handle<Image>> {
        self.images.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Current load status of every registered image
    pub fn statuses(&self, asset_server: &AssetServer) -> Vec<(TileKind, LoadStatus)> {
        self.images
            .iter()
            .map(|(kind, handle)| (*kind, LoadStatus::of(asset_server, handle)))
            .collect()
    }
}

/// Load progress of a single image
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    fn of(asset_server: &AssetServer, handle: &Handle<Image>) -> Self {
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => LoadStatus::Loaded,
            Some(LoadState::Failed(err)) => LoadStatus::Failed(err.to_string()),
            _ => LoadStatus::Pending,
        }
    }
}

/// Decide whether editing may start
/// Ok(true) once every image is loaded, Ok(false) while any is pending,
/// Err on the first failure regardless of the others
pub fn startup_gate<I>(statuses: I) -> Result<bool, EditorError>
where
    I: IntoIterator<Item = (TileKind, LoadStatus)>,
{
    let mut ready = true;
    for (kind, status) in statuses {
        match status {
            LoadStatus::Loaded => {}
            LoadStatus::Pending => ready = false,
            LoadStatus::Failed(reason) => {
                return Err(EditorError::AssetLoad {
                    key: kind.asset_key(),
                    path: kind.asset_path(),
                    reason,
                });
            }
        }
    }
    Ok(ready)
}
