// File: crates/plot-render-skia/src/surface.rs
// Summary: `Surface` implementation over a Skia CPU raster surface.

use anyhow::Result;
use plot_core::{Canvas, PixelPoint, Rgba, Stroke, Surface};
use skia_safe as skia;

pub struct SkiaSurface {
    surface: skia::Surface,
    canvas: Canvas,
}

impl SkiaSurface {
    pub fn new(canvas: Canvas) -> Result<Self> {
        Ok(Self { surface: raster(canvas)?, canvas })
    }

    pub fn canvas(&self) -> Canvas { self.canvas }

    /// Unpremultiplied RGBA8 pixels, row-major, stride `width * 4`.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} raster failed");
        }
        Ok(pixels)
    }

    /// PNG-encoded snapshot of the current pixels.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let pixels = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(self.canvas.width(), self.canvas.height(), pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match canvas size"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, canvas: Canvas, background: Rgba) {
        if canvas != self.canvas {
            match raster(canvas) {
                Ok(surface) => {
                    self.surface = surface;
                    self.canvas = canvas;
                }
                Err(err) => log::error!("keeping {:?} raster: {err}", self.canvas),
            }
        }
        self.surface.canvas().clear(color(background));
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_line(point(from), point(to), &paint);
    }

    fn stroke_polylines(&mut self, polylines: &[Vec<PixelPoint>], stroke: Stroke) {
        let mut path = skia::Path::new();
        for line in polylines {
            // A lone point has no extent; a 2D canvas path would not paint it either.
            let [first, rest @ ..] = line.as_slice() else { continue };
            if rest.is_empty() {
                continue;
            }
            path.move_to(point(*first));
            for p in rest {
                path.line_to(point(*p));
            }
        }
        if !path.is_empty() {
            self.surface.canvas().draw_path(&path, &stroke_paint(stroke));
        }
    }
}

fn raster(canvas: Canvas) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((canvas.width() as i32, canvas.height() as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", canvas.width(), canvas.height()))
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn point(p: PixelPoint) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color(stroke.color));
    paint
}
