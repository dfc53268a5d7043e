// File: crates/plot-core/src/render.rs
// Summary: Backend-agnostic render pass (clear, integer grid, axes, sampled curve) over a `Surface`.

use crate::expr::Expression;
use crate::geometry::PixelPoint;
use crate::theme::{Rgba, Stroke, Theme};
use crate::types::Canvas;
use crate::viewport::Viewport;

/// Minimal drawing target a render pass needs.
pub trait Surface {
    /// Erase the whole `canvas` extent to `background`.
    fn clear(&mut self, canvas: Canvas, background: Rgba);
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke);
    /// Stroke every polyline in one pass. Consecutive points are joined; polylines are not.
    fn stroke_polylines(&mut self, polylines: &[Vec<PixelPoint>], stroke: Stroke);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: u32, height: u32, color: Rgba },
    Line { from: PixelPoint, to: PixelPoint, stroke: Stroke },
    Polylines { polylines: Vec<Vec<PixelPoint>>, stroke: Stroke },
}

/// Surface that records commands instead of rasterizing; used headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Lines drawn with exactly `stroke`, as `(from, to)` pairs.
    pub fn lines_with(&self, stroke: Stroke) -> Vec<(PixelPoint, PixelPoint)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, stroke: s } if *s == stroke => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Polylines of every `stroke_polylines` call, flattened in draw order.
    pub fn polylines(&self) -> Vec<&Vec<PixelPoint>> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polylines { polylines, .. } => Some(polylines.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, canvas: Canvas, background: Rgba) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width: canvas.width(), height: canvas.height(), color: background });
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn stroke_polylines(&mut self, polylines: &[Vec<PixelPoint>], stroke: Stroke) {
        self.commands.push(DrawCommand::Polylines { polylines: polylines.to_vec(), stroke });
    }
}

/// One evaluated pixel column; `y` is `None` when non-finite or outside the visible y-range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub column: u32,
    pub y: Option<f64>,
}

/// Evaluate `expr` at every column `0..=width`.
pub fn samples<'a>(
    viewport: &'a Viewport,
    canvas: Canvas,
    expr: &'a Expression,
) -> impl Iterator<Item = Sample> + 'a {
    (0..=canvas.width()).map(move |column| {
        let x = viewport.to_math_x(column as f64, canvas);
        let y = expr.eval_finite(x).filter(|y| viewport.contains_y(*y));
        Sample { column, y }
    })
}

/// Split the sampled curve into drawable polylines.
///
/// A new polyline starts after every undefined sample and wherever the pixel
/// jump from the previous valid sample reaches a quarter of the canvas height,
/// so asymptotes such as `tan(x)` are not bridged by near-vertical lines.
pub fn curve_segments(viewport: &Viewport, canvas: Canvas, expr: &Expression) -> Vec<Vec<PixelPoint>> {
    let max_jump = canvas.height_f() / 4.0;
    let mut segments: Vec<Vec<PixelPoint>> = Vec::new();
    let mut current: Vec<PixelPoint> = Vec::new();

    for sample in samples(viewport, canvas, expr) {
        let Some(y) = sample.y else {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        };
        let p = PixelPoint::new(sample.column as f64, viewport.to_pixel_y(y, canvas));
        if let Some(prev) = current.last() {
            if (p.y - prev.y).abs() >= max_jump {
                segments.push(std::mem::take(&mut current));
            }
        }
        current.push(p);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Pixel x of each vertical grid line (one per integer x in view).
pub fn vertical_grid_lines(viewport: &Viewport, canvas: Canvas) -> Vec<f64> {
    integer_steps(viewport.x_min(), viewport.x_max(), canvas.width())
        .map(|x| viewport.to_pixel_x(x, canvas))
        .collect()
}

/// Pixel y of each horizontal grid line (one per integer y in view).
pub fn horizontal_grid_lines(viewport: &Viewport, canvas: Canvas) -> Vec<f64> {
    integer_steps(viewport.y_min(), viewport.y_max(), canvas.height())
        .map(|y| viewport.to_pixel_y(y, canvas))
        .collect()
}

/// Integers in `[min, max]`, or nothing when there are more of them than `extent_px`.
fn integer_steps(min: f64, max: f64, extent_px: u32) -> impl Iterator<Item = f64> {
    let start = min.ceil() as i64;
    let end = max.floor() as i64;
    let count = (end - start + 1).max(0);
    let range = if count > extent_px as i64 {
        log::trace!("grid skipped: {count} lines over {extent_px}px");
        1..=0
    } else {
        start..=end
    };
    range.map(|i| i as f64)
}

pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme { &self.theme }

    /// Full pass: clear, grid, axes, curve. Only touches `surface`.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        viewport: &Viewport,
        canvas: Canvas,
        expr: &Expression,
    ) {
        let (w, h) = (canvas.width_f(), canvas.height_f());
        surface.clear(canvas, self.theme.background);

        for x in vertical_grid_lines(viewport, canvas) {
            surface.stroke_line(PixelPoint::new(x, 0.0), PixelPoint::new(x, h), self.theme.grid);
        }
        for y in horizontal_grid_lines(viewport, canvas) {
            surface.stroke_line(PixelPoint::new(0.0, y), PixelPoint::new(w, y), self.theme.grid);
        }

        if viewport.contains_y(0.0) {
            let y0 = viewport.to_pixel_y(0.0, canvas);
            surface.stroke_line(PixelPoint::new(0.0, y0), PixelPoint::new(w, y0), self.theme.axis);
        }
        if viewport.contains_x(0.0) {
            let x0 = viewport.to_pixel_x(0.0, canvas);
            surface.stroke_line(PixelPoint::new(x0, 0.0), PixelPoint::new(x0, h), self.theme.axis);
        }

        let segments = curve_segments(viewport, canvas, expr);
        log::trace!("render '{}': {} segment(s)", expr.source(), segments.len());
        surface.stroke_polylines(&segments, self.theme.curve);
    }
}

impl Default for Renderer {
    fn default() -> Self { Self::new(Theme::default()) }
}
