//! Plain geometry values shared by the layout planner, the rating engine and
//! the render model. All coordinates are in the control's local space with
//! the origin at its top-left corner.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. `None` when the height is zero or either
    /// dimension is not finite.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f64> {
        let ratio = self.width / self.height;
        (self.height != 0.0 && ratio.is_finite()).then_some(ratio)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from an origin and a size.
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Convert a point into this rectangle's local space.
    #[must_use]
    pub fn to_local(&self, pt: Point) -> Point {
        Point::new(pt.x - self.x, pt.y - self.y)
    }

    /// Whether a point in this rectangle's local space lies inside
    /// `[0, width) × [0, height)`.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive, so
    /// adjacent rectangles never both claim the same point.
    #[must_use]
    pub fn contains_local(&self, local: Point) -> bool {
        (0.0..self.width).contains(&local.x) && (0.0..self.height).contains(&local.y)
    }
}
