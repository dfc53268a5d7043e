// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plotter state machine, evaluator and renderer.

pub mod config;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod interaction;
pub mod plotter;
pub mod render;
pub mod theme;
pub mod types;
pub mod viewport;

pub use config::PlotConfig;
pub use error::PlotError;
pub use expr::{ExprError, Expression};
pub use geometry::{PixelPoint, Point};
pub use interaction::{DragState, Interaction, PointerEvent, WheelDirection};
pub use plotter::{EventResponse, PlotEvent, Plotter, HINT};
pub use render::{DrawCommand, RecordingSurface, Renderer, Sample, Surface};
pub use theme::{Rgba, Stroke, Theme};
pub use types::Canvas;
pub use viewport::{Viewport, ViewportError};
