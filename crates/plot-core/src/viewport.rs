// File: crates/plot-core/src/viewport.rs
// Visible math rectangle: coordinate mapping to the canvas and pan/zoom helpers.

use std::fmt;

use thiserror::Error;

use crate::geometry::{PixelPoint, Point};
use crate::types::{Canvas, DEFAULT_MAX, DEFAULT_MIN};

/// Smallest span either axis may shrink to.
pub const MIN_SPAN: f64 = 1e-9;
/// Largest span either axis may grow to.
pub const MAX_SPAN: f64 = 1e12;
/// Span floor relative to the coordinates' magnitude; below it columns stop being distinct.
const REL_SPAN: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    #[error("{axis} range has a non-finite bound")]
    NonFinite { axis: AxisId },
    #[error("{axis} range [{min}, {max}] is empty, inverted or out of bounds")]
    Degenerate { axis: AxisId, min: f64, max: f64 },
    #[error("zoom factor {0} must be finite and positive")]
    InvalidFactor(f64),
}

/// Invariant: bounds finite, `x_min < x_max`, `y_min < y_max`, spans within
/// [`MIN_SPAN`], [`MAX_SPAN`]. Every mutator validates before committing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        check_axis(AxisId::X, x_min, x_max)?;
        check_axis(AxisId::Y, y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    pub fn x_min(&self) -> f64 { self.x_min }
    pub fn x_max(&self) -> f64 { self.x_max }
    pub fn y_min(&self) -> f64 { self.y_min }
    pub fn y_max(&self) -> f64 { self.y_max }
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    #[inline]
    pub fn contains_x(&self, x: f64) -> bool { x >= self.x_min && x <= self.x_max }
    #[inline]
    pub fn contains_y(&self, y: f64) -> bool { y >= self.y_min && y <= self.y_max }

    #[inline]
    pub fn to_pixel_x(&self, x: f64, canvas: Canvas) -> f64 {
        (x - self.x_min) / self.x_span() * canvas.width_f()
    }

    /// Math "up" is pixel "up": y is flipped against the canvas.
    #[inline]
    pub fn to_pixel_y(&self, y: f64, canvas: Canvas) -> f64 {
        canvas.height_f() - (y - self.y_min) / self.y_span() * canvas.height_f()
    }

    #[inline]
    pub fn to_math_x(&self, px: f64, canvas: Canvas) -> f64 {
        self.x_min + px / canvas.width_f() * self.x_span()
    }

    #[inline]
    pub fn to_math_y(&self, py: f64, canvas: Canvas) -> f64 {
        self.y_min + (canvas.height_f() - py) / canvas.height_f() * self.y_span()
    }

    pub fn to_pixel(&self, p: Point, canvas: Canvas) -> PixelPoint {
        PixelPoint::new(self.to_pixel_x(p.x, canvas), self.to_pixel_y(p.y, canvas))
    }

    pub fn to_math(&self, p: PixelPoint, canvas: Canvas) -> Point {
        Point::new(self.to_math_x(p.x, canvas), self.to_math_y(p.y, canvas))
    }

    /// Translate by a pixel drag delta. Spans are preserved; screen-down is math-down.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, canvas: Canvas) -> Result<(), ViewportError> {
        let wx = dx * self.x_span() / canvas.width_f();
        let wy = dy * self.y_span() / canvas.height_f();
        let next = Viewport::new(self.x_min - wx, self.x_max - wx, self.y_min + wy, self.y_max + wy)?;
        *self = next;
        Ok(())
    }

    /// Rescale around the math point under `(px, py)`; that point stays under the cursor.
    /// `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn zoom_at_pixel(&mut self, px: f64, py: f64, factor: f64, canvas: Canvas) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidFactor(factor));
        }
        let gx = self.to_math_x(px, canvas);
        let gy = self.to_math_y(py, canvas);
        let next = Viewport::new(
            gx - (gx - self.x_min) * factor,
            gx + (self.x_max - gx) * factor,
            gy - (gy - self.y_min) * factor,
            gy + (self.y_max - gy) * factor,
        )?;
        *self = next;
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x_min: DEFAULT_MIN, x_max: DEFAULT_MAX, y_min: DEFAULT_MIN, y_max: DEFAULT_MAX }
    }
}

fn check_axis(axis: AxisId, min: f64, max: f64) -> Result<(), ViewportError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ViewportError::NonFinite { axis });
    }
    let span = max - min;
    let floor = MIN_SPAN.max(min.abs().max(max.abs()) * REL_SPAN);
    if !(span >= floor && span <= MAX_SPAN) {
        return Err(ViewportError::Degenerate { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert!(matches!(Viewport::new(1.0, 1.0, 0.0, 1.0), Err(ViewportError::Degenerate { axis: AxisId::X, .. })));
        assert!(matches!(Viewport::new(0.0, 1.0, 2.0, -2.0), Err(ViewportError::Degenerate { axis: AxisId::Y, .. })));
        assert!(matches!(Viewport::new(f64::NAN, 1.0, 0.0, 1.0), Err(ViewportError::NonFinite { .. })));
    }

    #[test]
    fn relative_floor_scales_with_magnitude() {
        // 1e-8 wide is fine near zero but collapses at 1e9.
        assert!(Viewport::new(0.0, 1e-8, 0.0, 1.0).is_ok());
        assert!(Viewport::new(1e9, 1e9 + 1e-8, 0.0, 1.0).is_err());
    }

    #[test]
    fn zoom_rejects_bad_factor() {
        let mut v = Viewport::default();
        let c = Canvas::default();
        assert_eq!(v.zoom_at_pixel(10.0, 10.0, 0.0, c), Err(ViewportError::InvalidFactor(0.0)));
        assert_eq!(v, Viewport::default());
    }
}
