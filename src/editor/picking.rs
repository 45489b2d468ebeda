//! Screen to grid mapping
//!
//! A pointer position on the canvas is shifted into level space by the camera,
//! snapped up to the next tile boundary with `ceil`, and the cell is recovered
//! from the snapped value with a second `ceil`. A click exactly on a grid line
//! therefore belongs to the cell above/left of it, and a level coordinate of 0
//! falls outside the map.

use super::camera::EditorCamera;
use crate::tiles::{CellPos, TileGrid};
use bevy::prelude::*;

/// The cell a pointer position resolves to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTarget {
    pub cell: CellPos,
    /// Flat layer index, `row * cols + col`
    pub index: usize,
    /// Tile centre in level pixels
    pub center: Vec2,
}

/// Pointer position (canvas pixels) to level pixels
pub fn level_position(pointer: Vec2, camera: &EditorCamera) -> Vec2 {
    pointer + camera.position()
}

/// Round a level coordinate up to the next multiple of `tile_size`
pub fn snap_up(level: f32, tile_size: f32) -> f32 {
    (level / tile_size).ceil() * tile_size
}

/// Grid coordinate of a snapped value; may be negative or past the map
fn grid_coord(snapped: f32, tile_size: f32) -> i64 {
    (snapped / tile_size).ceil() as i64 - 1
}

/// Resolve the cell under the pointer, or None when it lies outside the map
pub fn cell_under_pointer(pointer: Vec2, camera: &EditorCamera, grid: &TileGrid) -> Option<CellTarget> {
    let tile_size = grid.tile_size();
    let level = level_position(pointer, camera);
    let snapped = Vec2::new(snap_up(level.x, tile_size), snap_up(level.y, tile_size));

    let col = usize::try_from(grid_coord(snapped.x, tile_size)).ok()?;
    let row = usize::try_from(grid_coord(snapped.y, tile_size)).ok()?;
    let index = grid.index(col, row)?;

    Some(CellTarget {
        cell: CellPos::new(col, row),
        index,
        center: snapped - tile_size / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(cols: usize, rows: usize, camera_pos: Vec2) -> (TileGrid, EditorCamera) {
        let grid = TileGrid::new(cols, rows, 64.0);
        let camera = EditorCamera::new(&grid, 512.0, 512.0, camera_pos, 256.0);
        (grid, camera)
    }

    #[test]
    fn test_snap_up() {
        assert_eq!(snap_up(1.0, 64.0), 64.0);
        assert_eq!(snap_up(63.9, 64.0), 64.0);
        assert_eq!(snap_up(64.0, 64.0), 64.0);
        assert_eq!(snap_up(64.5, 64.0), 128.0);
        assert_eq!(snap_up(0.0, 64.0), 0.0);
    }

    #[test]
    fn test_exact_boundaries_map_to_lower_cell() {
        let (grid, camera) = setup(12, 12, Vec2::ZERO);
        for k in 1..=8 {
            let level = k as f32 * 64.0;
            let target = cell_under_pointer(Vec2::new(level, level), &camera, &grid).unwrap();
            assert_eq!(target.cell, CellPos::new(k - 1, k - 1), "k = {}", k);

            // One pixel further belongs to the next cell
            let next = cell_under_pointer(Vec2::new(level + 1.0, level + 1.0), &camera, &grid).unwrap();
            assert_eq!(next.cell, CellPos::new(k, k), "k = {}", k);
        }
    }

    #[test]
    fn test_level_zero_is_outside() {
        let (grid, camera) = setup(12, 12, Vec2::ZERO);
        assert_eq!(cell_under_pointer(Vec2::ZERO, &camera, &grid), None);
        assert_eq!(cell_under_pointer(Vec2::new(10.0, 0.0), &camera, &grid), None);
    }

    #[test]
    fn test_camera_offset_and_column_stride() {
        // 8 columns by 16 rows tells `row * cols` apart from `row * rows`
        let (grid, camera) = setup(8, 16, Vec2::new(0.0, 320.0));
        assert_eq!(camera.position(), Vec2::new(0.0, 320.0));

        let target = cell_under_pointer(Vec2::new(1.0, 1.0), &camera, &grid).unwrap();
        assert_eq!(level_position(Vec2::new(1.0, 1.0), &camera), Vec2::new(1.0, 321.0));
        assert_eq!(target.cell, CellPos::new(0, 5));
        assert_eq!(target.index, 5 * 8);
        assert_eq!(target.center, Vec2::new(32.0, 352.0));
    }

    #[test]
    fn test_outside_map_is_none() {
        let (grid, camera) = setup(12, 12, Vec2::new(256.0, 256.0));
        // Last column and row are still inside
        let target = cell_under_pointer(Vec2::new(511.0, 511.0), &camera, &grid).unwrap();
        assert_eq!(target.cell, CellPos::new(11, 11));
        assert_eq!(target.index, 143);

        assert_eq!(cell_under_pointer(Vec2::new(513.0, 10.0), &camera, &grid), None);
        assert_eq!(cell_under_pointer(Vec2::new(10.0, 513.0), &camera, &grid), None);
        assert_eq!(cell_under_pointer(Vec2::new(-300.0, 10.0), &camera, &grid), None);
    }
}
