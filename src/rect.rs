
use std::num::NonZeroUsize;

/// A query rectangle with inclusive corners, normalized so that
/// `x0 <= x1` and `y0 <= y1`. It may extend past the grid on any side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// The part of a [`Rect`] that lies inside the grid, as table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    /// Builds a rectangle from two opposite corners given in any order.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Number of cells covered by the rectangle, including the cells that
    /// fall outside the grid.
    #[must_use]
    pub fn area(self) -> f64 {
        let width = i64::from(self.x1) - i64::from(self.x0) + 1;
        let height = i64::from(self.y1) - i64::from(self.y0) + 1;
        // i64 can hold each side but not their product for extreme corners.
        width as f64 * height as f64
    }

    /// Clips the rectangle to a `width` x `height` grid.
    ///
    /// Returns `None` when no cell of the rectangle lies inside the grid.
    #[must_use]
    pub fn clamp(self, width: NonZeroUsize, height: NonZeroUsize) -> Option<Region> {
        let width = i64::try_from(width.get()).ok()?;
        let height = i64::try_from(height.get()).ok()?;
        let (x0, y0, x1, y1) = (
            i64::from(self.x0),
            i64::from(self.y0),
            i64::from(self.x1),
            i64::from(self.y1),
        );

        if x1 < 0 || x0 >= width || y1 < 0 || y0 >= height {
            return None;
        }

        // Every bound is now within 0..width or 0..height.
        Some(Region {
            x0: x0.max(0) as usize,
            y0: y0.max(0) as usize,
            x1: x1.min(width - 1) as usize,
            y1: y1.min(height - 1) as usize,
        })
    }
}
