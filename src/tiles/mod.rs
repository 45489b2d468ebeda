pub mod constants;
pub mod grid;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use grid::TileGrid;
pub use registry::{startup_gate, LoadStatus, TileAtlas};
pub use types::{CellPos, Tile, TileKind};
