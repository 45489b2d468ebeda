use super::camera::EditorCamera;
use super::input::{EditorInput, InputQueue, KeyBindings, KeyTable};
use super::picking::{cell_under_pointer, CellTarget};
use super::render::{render_frame, DrawSurface};
use super::{EditorConfig, EditorError};
use crate::tiles::{Tile, TileGrid, TileKind, LAYER_GROUND};
use bevy::prelude::*;

/// Owns the map, the camera and all editing state for one session
#[derive(Resource, Debug)]
pub struct EditorController {
    grid: TileGrid,
    camera: EditorCamera,
    keys: KeyTable,
    bindings: KeyBindings,
    queue: InputQueue,
    /// Last known pointer position relative to the canvas
    pointer: Vec2,
    selected: Option<TileKind>,
    previous_elapsed: f64,
    max_delta: f64,
}

impl EditorController {
    /// Build a fresh session; `started_at` is the clock reading the first tick is measured from
    pub fn new(config: &EditorConfig, started_at: f64) -> Self {
        let mut grid = TileGrid::new(config.cols, config.rows, config.tile_size);
        grid.create_layer(LAYER_GROUND);
        let camera = EditorCamera::new(
            &grid,
            config.viewport.x,
            config.viewport.y,
            config.camera_start,
            config.camera_speed,
        );

        Self {
            grid,
            camera,
            keys: KeyTable::listen_for(&config.bindings.all()),
            bindings: config.bindings,
            queue: InputQueue::default(),
            pointer: Vec2::ZERO,
            selected: None,
            previous_elapsed: started_at,
            max_delta: config.max_frame_delta,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn camera(&self) -> &EditorCamera {
        &self.camera
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn selected_tile(&self) -> Option<TileKind> {
        self.selected
    }

    /// Choose the tile kind the next click places
    pub fn select_tile(&mut self, kind: Option<TileKind>) {
        self.selected = kind;
    }

    /// Queue an input for the next tick
    pub fn push_input(&mut self, input: EditorInput) {
        self.queue.push(input);
    }

    /// Run one frame: drain inputs, then update with the clamped delta
    /// Returns the delta actually applied, in seconds
    pub fn tick(&mut self, elapsed: f64) -> Result<f64, EditorError> {
        let inputs: Vec<_> = self.queue.drain().collect();
        for input in inputs {
            self.apply_input(input);
        }

        let delta = (elapsed - self.previous_elapsed).clamp(0.0, self.max_delta);
        self.previous_elapsed = elapsed;

        self.update(delta)?;
        Ok(delta)
    }

    fn apply_input(&mut self, input: EditorInput) {
        match input {
            EditorInput::PointerMoved(position) => self.pointer = position,
            EditorInput::Click => {
                self.place_at(self.pointer);
            }
            EditorInput::KeyDown(key) => self.keys.key_down(key),
            EditorInput::KeyUp(key) => self.keys.key_up(key),
        }
    }

    fn update(&mut self, delta: f64) -> Result<(), EditorError> {
        let mut dir_x = 0;
        let mut dir_y = 0;
        if self.keys.is_down(self.bindings.left)? {
            dir_x = -1;
        }
        if self.keys.is_down(self.bindings.right)? {
            dir_x = 1;
        }
        if self.keys.is_down(self.bindings.up)? {
            dir_y = -1;
        }
        if self.keys.is_down(self.bindings.down)? {
            dir_y = 1;
        }

        if self.keys.is_down(self.bindings.remove)? {
            self.remove_at(self.pointer);
        }

        self.camera.move_by(delta as f32, dir_x, dir_y);
        Ok(())
    }

    /// Place the selected tile under `pointer`
    /// No-op when nothing is selected or the pointer is off the map
    pub fn place_at(&mut self, pointer: Vec2) -> Option<CellTarget> {
        let Some(kind) = self.selected else {
            debug!("Click at {:?} ignored, no tile selected", pointer);
            return None;
        };
        let target = cell_under_pointer(pointer, &self.camera, &self.grid)?;
        let tile = Tile::Placed {
            kind,
            center: target.center,
        };
        self.grid.set_tile(LAYER_GROUND, target.cell.col, target.cell.row, tile);
        debug!("Placed {:?} at {:?} (index {})", kind, target.cell, target.index);
        Some(target)
    }

    /// Clear the tile under `pointer`; no-op when the pointer is off the map
    pub fn remove_at(&mut self, pointer: Vec2) -> Option<CellTarget> {
        let target = cell_under_pointer(pointer, &self.camera, &self.grid)?;
        self.grid.set_tile(LAYER_GROUND, target.cell.col, target.cell.row, Tile::Empty);
        Some(target)
    }

    /// Draw the current frame
    pub fn render<S: DrawSurface>(&self, surface: &mut S) {
        render_frame(&self.grid, &self.camera, surface);
    }
}
