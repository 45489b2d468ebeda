use super::types::{CellPos, Tile};

/// Fixed-size tile map being edited
/// Each layer is a flat row-major array of `cols * rows` slots
#[derive(Debug, Clone)]
pub struct TileGrid {
    cols: usize,
    rows: usize,
    tile_size: f32,
    layers: Vec<Vec<Tile>>,
}

impl TileGrid {
    /// Create a grid with no layers; call `create_layer` before painting
    pub fn new(cols: usize, rows: usize, tile_size: f32) -> Self {
        Self {
            cols,
            rows,
            tile_size,
            layers: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Map size in level pixels
    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Fill a layer with empty slots, allocating it (and any lower layers) if needed
    pub fn create_layer(&mut self, layer: usize) {
        let area = self.cols * self.rows;
        if self.layers.len() <= layer {
            self.layers.resize_with(layer + 1, Vec::new);
        }
        self.layers[layer] = vec![Tile::Empty; area];
    }

    /// Flat index of a cell, row-major with stride `cols`
    pub fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get the tile at a cell
    pub fn get_tile(&self, layer: usize, col: usize, row: usize) -> Option<Tile> {
        let index = self.index(col, row)?;
        self.layers.get(layer)?.get(index).copied()
    }

    /// Overwrite the tile at a cell; returns false if nothing was written
    pub fn set_tile(&mut self, layer: usize, col: usize, row: usize, tile: Tile) -> bool {
        let Some(index) = self.index(col, row) else {
            return false;
        };
        match self.layers.get_mut(layer).and_then(|slots| slots.get_mut(index)) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Iterate over the non-empty cells of a layer
    pub fn placed_tiles(&self, layer: usize) -> impl Iterator<Item = (CellPos, Tile)> + '_ {
        let cols = self.cols;
        self.layers
            .get(layer)
            .into_iter()
            .flat_map(|slots| slots.iter().enumerate())
            .filter(|(_, tile)| !tile.is_empty())
            .map(move |(index, tile)| (CellPos::new(index % cols, index / cols), *tile))
    }
}
