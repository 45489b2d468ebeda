use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Kinds of tile the palette can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Grass,
    Dirt,
}

impl TileKind {
    /// Every kind, in palette order
    pub const ALL: [TileKind; 2] = [TileKind::Grass, TileKind::Dirt];

    /// Logical key the image is registered under
    pub const fn asset_key(self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::Dirt => "dirt",
        }
    }

    /// Image path relative to the assets directory
    pub const fn asset_path(self) -> &'static str {
        match self {
            TileKind::Grass => "tiles/grass.png",
            TileKind::Dirt => "tiles/dirt.png",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TileKind::Grass => "Grass",
            TileKind::Dirt => "Dirt",
        }
    }
}

/// Content of one grid slot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tile {
    #[default]
    Empty,
    /// A placed tile; `center` is its centre in level pixels
    Placed { kind: TileKind, center: Vec2 },
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn kind(&self) -> Option<TileKind> {
        match self {
            Tile::Empty => None,
            Tile::Placed { kind, .. } => Some(*kind),
        }
    }
}

/// Cell position in grid coordinates (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_kind_keys_are_unique() {
        let keys: Vec<_> = TileKind::ALL.iter().map(|k| k.asset_key()).collect();
        assert_eq!(keys, vec!["grass", "dirt"]);
        assert!(TileKind::ALL.iter().all(|k| k.asset_path().starts_with("tiles/")));
    }

    #[test]
    fn test_tile_default_is_empty() {
        let tile = Tile::default();
        assert!(tile.is_empty());
        assert_eq!(tile.kind(), None);

        let placed = Tile::Placed {
            kind: TileKind::Dirt,
            center: Vec2::new(32.0, 32.0),
        };
        assert!(!placed.is_empty());
        assert_eq!(placed.kind(), Some(TileKind::Dirt));
    }
}
