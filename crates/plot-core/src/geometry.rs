// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight point types for math space and pixel space.

/// A point in mathematical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in canvas pixels; origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    pub fn delta_from(self, origin: PixelPoint) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}
