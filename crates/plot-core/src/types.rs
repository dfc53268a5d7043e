// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (canvas size, default ranges, zoom factors).

use crate::error::PlotError;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Default visible range on both axes.
pub const DEFAULT_MIN: f64 = -10.0;
pub const DEFAULT_MAX: f64 = 10.0;

/// Formula plotted when nothing else is configured.
pub const DEFAULT_FUNCTION: &str = "sin(x)";

/// Wheel zoom factors (< 1 zooms in).
pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

/// Pixel drawing area.
/// Contract: both dimensions are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, PlotError> {
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 { self.width }
    pub const fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn width_f(&self) -> f64 { self.width as f64 }
    #[inline]
    pub fn height_f(&self) -> f64 { self.height as f64 }
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}
