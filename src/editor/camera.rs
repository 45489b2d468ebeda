use crate::tiles::TileGrid;
use bevy::prelude::*;

/// Scrolling viewport over the level, in level pixels (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCamera {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    max_x: f32,
    max_y: f32,
    speed: f32,
}

impl EditorCamera {
    /// Create a viewport of the given size over `grid`, starting at `start`
    /// The start position is clamped like any other move
    pub fn new(grid: &TileGrid, width: f32, height: f32, start: Vec2, speed: f32) -> Self {
        let mut camera = Self {
            x: start.x,
            y: start.y,
            width,
            height,
            max_x: grid.pixel_width() - width,
            max_y: grid.pixel_height() - height,
            speed,
        };
        camera.clamp();
        camera
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Viewport size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Advance by `speed * delta` along each active axis, then clamp
    /// Diagonal movement runs at full speed on both axes
    pub fn move_by(&mut self, delta_secs: f32, dir_x: i32, dir_y: i32) {
        self.x += dir_x.signum() as f32 * self.speed * delta_secs;
        self.y += dir_y.signum() as f32 * self.speed * delta_secs;
        self.clamp();
    }

    // A map narrower than the viewport pins the axis at 0
    fn clamp(&mut self) {
        self.x = self.x.min(self.max_x).max(0.0);
        self.y = self.y.min(self.max_y).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> EditorCamera {
        let grid = TileGrid::new(12, 12, 64.0);
        EditorCamera::new(&grid, 512.0, 512.0, Vec2::new(0.0, 320.0), 256.0)
    }

    #[test]
    fn test_bounds() {
        let camera = camera();
        assert_eq!(camera.max_x(), 256.0);
        assert_eq!(camera.max_y(), 256.0);
        // Start position 320 is past max_y and gets clamped
        assert_eq!(camera.position(), Vec2::new(0.0, 256.0));
    }

    #[test]
    fn test_move_scales_with_delta() {
        let mut camera = camera();
        camera.move_by(0.25, 1, -1);
        assert_eq!(camera.position(), Vec2::new(64.0, 192.0));

        camera.move_by(0.125, 0, 0);
        assert_eq!(camera.position(), Vec2::new(64.0, 192.0));
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let mut camera = camera();
        camera.y = 0.0;
        camera.move_by(0.5, 1, 1);
        assert_eq!(camera.position(), Vec2::new(128.0, 128.0));
    }

    #[test]
    fn test_clamp_holds_for_any_sequence() {
        let mut camera = camera();
        let dirs = [-1, 0, 1];
        let deltas = [0.0, 0.016, 0.1, 0.25, 3.0];
        for (step, delta) in deltas.iter().cycle().take(200).enumerate() {
            let dir_x = dirs[step % 3];
            let dir_y = dirs[(step / 3) % 3];
            camera.move_by(*delta, dir_x, dir_y);
            assert!(camera.x >= 0.0 && camera.x <= camera.max_x(), "x = {}", camera.x);
            assert!(camera.y >= 0.0 && camera.y <= camera.max_y(), "y = {}", camera.y);
        }
    }

    #[test]
    fn test_map_smaller_than_viewport() {
        let grid = TileGrid::new(4, 4, 64.0);
        let mut camera = EditorCamera::new(&grid, 512.0, 512.0, Vec2::ZERO, 256.0);
        camera.move_by(1.0, 1, 1);
        assert_eq!(camera.position(), Vec2::ZERO);
    }
}
