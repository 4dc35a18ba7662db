//! Mapping between terminal cells and field coordinates.

use glam::Vec2;
use ratatui::layout::Rect;

/// The terminal area a field of `width` x `height` is stretched across.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(area: Rect, width: f32, height: f32) -> Self {
        Self {
            area,
            width,
            height,
        }
    }

    /// Field coordinates of the centre of the cell at (`column`, `row`).
    ///
    /// Returns `None` when the cell is outside the canvas area.
    pub fn cell_to_field(&self, column: u16, row: u16) -> Option<Vec2> {
        if self.area.is_empty() {
            return None;
        }
        let right = self.area.x.saturating_add(self.area.width);
        let bottom = self.area.y.saturating_add(self.area.height);
        if column < self.area.x || column >= right || row < self.area.y || row >= bottom {
            return None;
        }

        let fx = (column - self.area.x) as f32 + 0.5;
        let fy = (row - self.area.y) as f32 + 0.5;

        Some(Vec2::new(
            fx * self.width / self.area.width as f32,
            fy * self.height / self.area.height as f32,
        ))
    }

    /// Convert a field point to canvas coordinates, where y grows upwards.
    pub fn to_canvas(&self, point: Vec2) -> (f64, f64) {
        (point.x as f64, (self.height - point.y) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, 80, 30), 800.0, 600.0)
    }

    #[test]
    fn test_cell_to_field_centres() {
        let vp = viewport();
        assert_eq!(vp.cell_to_field(0, 0), Some(Vec2::new(5.0, 10.0)));
        assert_eq!(vp.cell_to_field(79, 29), Some(Vec2::new(795.0, 590.0)));
        assert_eq!(vp.cell_to_field(40, 15), Some(Vec2::new(405.0, 310.0)));
    }

    #[test]
    fn test_cell_outside_area() {
        let vp = Viewport::new(Rect::new(2, 1, 10, 5), 800.0, 600.0);
        assert_eq!(vp.cell_to_field(1, 1), None);
        assert_eq!(vp.cell_to_field(12, 1), None);
        assert_eq!(vp.cell_to_field(2, 6), None);
        assert!(vp.cell_to_field(2, 1).is_some());
    }

    #[test]
    fn test_empty_area_maps_nothing() {
        let vp = Viewport::default();
        assert_eq!(vp.cell_to_field(0, 0), None);
    }

    #[test]
    fn test_to_canvas_flips_y() {
        let vp = viewport();
        assert_eq!(vp.to_canvas(Vec2::new(10.0, 0.0)), (10.0, 600.0));
        assert_eq!(vp.to_canvas(Vec2::new(10.0, 600.0)), (10.0, 0.0));
    }
}
