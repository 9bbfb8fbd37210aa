/// Viewport maps between screen pixels and grid cells.
/// The grid is drawn at a fixed integer scale from `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub scale: f32,
}

impl Viewport {
    pub fn new(scale: u32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            scale: scale.max(1) as f32,
        }
    }

    /// Convert screen coordinates to grid coordinates.
    /// Points left of or above the grid give negative cells.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let grid_x = ((screen_x - self.origin_x) / self.scale).floor() as i32;
        let grid_y = ((screen_y - self.origin_y) / self.scale).floor() as i32;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to the screen position of the cell's corner
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (
            grid_x as f32 * self.scale + self.origin_x,
            grid_y as f32 * self.scale + self.origin_y,
        )
    }

    /// On-screen size of a grid with the given dimensions
    pub fn screen_size(&self, (width, height): (usize, usize)) -> (f32, f32) {
        (width as f32 * self.scale, height as f32 * self.scale)
    }

    /// Whether a screen point lies over the drawn grid
    pub fn contains(&self, dimensions: (usize, usize), screen_x: f32, screen_y: f32) -> bool {
        let (w, h) = self.screen_size(dimensions);
        screen_x >= self.origin_x
            && screen_y >= self.origin_y
            && screen_x < self.origin_x + w
            && screen_y < self.origin_y + h
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_grid_floors() {
        let vp = Viewport::new(3);
        assert_eq!(vp.screen_to_grid(0.0, 0.0), (0, 0));
        assert_eq!(vp.screen_to_grid(8.9, 3.0), (2, 1));
        assert_eq!(vp.screen_to_grid(-0.5, -4.0), (-1, -2));
    }

    #[test]
    fn test_grid_to_screen_round_trip() {
        let vp = Viewport { origin_x: 10.0, origin_y: 5.0, scale: 4.0 };
        let (sx, sy) = vp.grid_to_screen(7, 3);
        assert_eq!((sx, sy), (38.0, 17.0));
        assert_eq!(vp.screen_to_grid(sx + 1.0, sy + 1.0), (7, 3));
    }

    #[test]
    fn test_contains() {
        let vp = Viewport::new(3);
        assert!(vp.contains((300, 200), 0.0, 0.0));
        assert!(vp.contains((300, 200), 899.0, 599.0));
        assert!(!vp.contains((300, 200), 900.0, 10.0));
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        assert_eq!(Viewport::new(0).scale, 1.0);
    }
}
