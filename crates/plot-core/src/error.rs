// File: crates/plot-core/src/error.rs
// Summary: Top-level error type for building and driving a plotter.

use thiserror::Error;

use crate::expr::ExprError;
use crate::viewport::ViewportError;

#[derive(Error, Debug)]
pub enum PlotError {
    /// Shown to the user when a submitted formula is rejected.
    #[error("invalid function, check syntax")]
    InvalidFunction(#[source] ExprError),
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("canvas must be non-empty, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExprError> for PlotError {
    fn from(err: ExprError) -> Self {
        PlotError::InvalidFunction(err)
    }
}
