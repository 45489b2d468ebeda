pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod picking;
pub mod render;
pub mod systems;
pub mod ui;

pub use controller::EditorController;
pub use error::EditorError;
pub use input::{EditorInput, KeyBindings};

use crate::tiles::{
    CAMERA_SPEED, CAMERA_START_X, CAMERA_START_Y, GRID_COLS, GRID_ROWS, MAX_FRAME_DELTA,
    PALETTE_WIDTH, TILE_SIZE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use bevy::prelude::*;

/// Plugin wiring the level editor into the app
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorConfig>()
            .init_state::<EditorPhase>()
            .add_systems(Startup, (systems::spawn_camera, systems::load_tile_images))
            .add_systems(
                Update,
                systems::check_tile_images.run_if(in_state(EditorPhase::Loading)),
            )
            .add_systems(
                OnEnter(EditorPhase::Editing),
                (systems::start_session, ui::setup_palette_ui).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::collect_input,
                    systems::tick_editor,
                    systems::draw_frame,
                    ui::update_palette,
                )
                    .chain()
                    .run_if(in_state(EditorPhase::Editing)),
            );
    }
}

/// Startup progress
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorPhase {
    /// Waiting for every tile image
    #[default]
    Loading,
    Editing,
}

/// Editor configuration
#[derive(Resource, Debug, Clone)]
pub struct EditorConfig {
    pub cols: usize,
    pub rows: usize,
    /// Pixel edge of a tile
    pub tile_size: f32,
    /// Canvas size in pixels
    pub viewport: Vec2,
    pub camera_start: Vec2,
    /// Pixels per second
    pub camera_speed: f32,
    /// Upper bound on the per-frame delta, in seconds
    pub max_frame_delta: f64,
    pub bindings: KeyBindings,
    pub palette_width: f32,
}

impl EditorConfig {
    /// Window size: canvas plus the palette panel on its right
    pub fn window_size(&self) -> UVec2 {
        UVec2::new(
            (self.viewport.x + self.palette_width) as u32,
            self.viewport.y as u32,
        )
    }

    /// Whether a canvas-relative point lies on the canvas
    pub fn on_canvas(&self, point: Vec2) -> bool {
        Rect::from_corners(Vec2::ZERO, self.viewport).contains(point)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            tile_size: TILE_SIZE,
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            camera_start: Vec2::new(CAMERA_START_X, CAMERA_START_Y),
            camera_speed: CAMERA_SPEED,
            max_frame_delta: MAX_FRAME_DELTA,
            bindings: KeyBindings::default(),
            palette_width: PALETTE_WIDTH,
        }
    }
}
