/// Number of columns in the editable map
pub const GRID_COLS: usize = 12;

/// Number of rows in the editable map
pub const GRID_ROWS: usize = 12;

/// Pixel edge length of a square tile
pub const TILE_SIZE: f32 = 64.0;

/// Base layer, the only one the editor paints on
pub const LAYER_GROUND: usize = 0;

/// Canvas (viewport) size in pixels
pub const VIEWPORT_WIDTH: f32 = 512.0;
pub const VIEWPORT_HEIGHT: f32 = 512.0;

/// Camera scroll speed in pixels per second
pub const CAMERA_SPEED: f32 = 256.0;

/// Camera start position in level pixels
pub const CAMERA_START_X: f32 = 0.0;
pub const CAMERA_START_Y: f32 = 320.0;

/// Largest frame delta fed to the camera, in seconds
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// Width of the tile palette panel to the right of the canvas
pub const PALETTE_WIDTH: f32 = 96.0;
