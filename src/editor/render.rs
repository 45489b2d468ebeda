use super::camera::EditorCamera;
use crate::tiles::{TileGrid, TileKind, LAYER_GROUND};
use bevy::prelude::*;

/// Minimal 2D drawing target the editor renders into
/// Coordinates are canvas pixels, origin top-left, y down
pub trait DrawSurface {
    fn clear_rect(&mut self, rect: Rect);
    fn draw_image(&mut self, kind: TileKind, dest: Rect);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Image { kind: TileKind, dest: Rect },
    Line { from: Vec2, to: Vec2 },
}

/// Surface that records draw calls for later replay
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawSurface for DrawList {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn draw_image(&mut self, kind: TileKind, dest: Rect) {
        self.commands.push(DrawCommand::Image { kind, dest });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }
}

/// Round half up to a whole pixel (-0.5 goes to 0, not -1)
fn round_pixel(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Draw one frame: clear, tiles of the ground layer in view, then grid lines
pub fn render_frame<S: DrawSurface>(grid: &TileGrid, camera: &EditorCamera, surface: &mut S) {
    surface.clear_rect(Rect::from_corners(Vec2::ZERO, camera.size()));
    draw_layer(grid, camera, LAYER_GROUND, surface);
    draw_grid_lines(grid, camera, surface);
}

/// Inclusive range of cells along one axis covered by the viewport
fn visible_range(offset: f32, extent: f32, tile_size: f32, count: usize) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let start = (offset / tile_size).floor().max(0.0);
    let end = (start + extent / tile_size).floor();
    let last = count - 1;
    Some(((start as usize).min(last), (end as usize).min(last)))
}

fn draw_layer<S: DrawSurface>(grid: &TileGrid, camera: &EditorCamera, layer: usize, surface: &mut S) {
    let tile_size = grid.tile_size();
    let origin = camera.position();
    let size = camera.size();
    let Some((start_col, end_col)) = visible_range(origin.x, size.x, tile_size, grid.cols()) else {
        return;
    };
    let Some((start_row, end_row)) = visible_range(origin.y, size.y, tile_size, grid.rows()) else {
        return;
    };

    for col in start_col..=end_col {
        for row in start_row..=end_row {
            let Some(kind) = grid.get_tile(layer, col, row).and_then(|tile| tile.kind()) else {
                continue;
            };
            let x = round_pixel(col as f32 * tile_size - origin.x);
            let y = round_pixel(row as f32 * tile_size - origin.y);
            let dest = Rect::new(x, y, x + tile_size, y + tile_size);
            surface.draw_image(kind, dest);
        }
    }
}

fn draw_grid_lines<S: DrawSurface>(grid: &TileGrid, camera: &EditorCamera, surface: &mut S) {
    let tile_size = grid.tile_size();
    let origin = camera.position();
    let width = grid.pixel_width() - origin.x;
    let height = grid.pixel_height() - origin.y;

    for row in 0..grid.rows() {
        let y = row as f32 * tile_size - origin.y;
        surface.stroke_line(Vec2::new(-origin.x, y), Vec2::new(width, y));
    }
    for col in 0..grid.cols() {
        let x = col as f32 * tile_size - origin.x;
        surface.stroke_line(Vec2::new(x, -origin.y), Vec2::new(x, height));
    }
}
