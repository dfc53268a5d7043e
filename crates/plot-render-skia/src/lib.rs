// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia renderer crate; headless PNG/RGBA rendering of a plotter's current state.

use anyhow::{Context, Result};
use plot_core::Plotter;

pub mod surface;

pub use surface::SkiaSurface;

/// Render the plotter into a fresh raster surface.
pub fn render_surface(plotter: &Plotter) -> Result<SkiaSurface> {
    let mut surface = SkiaSurface::new(plotter.canvas())?;
    plotter.render(&mut surface);
    Ok(surface)
}

/// Render to an RGBA8 buffer. Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(plotter: &Plotter) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(plotter)?;
    let canvas = surface.canvas();
    let pixels = surface.to_rgba8()?;
    Ok((pixels, canvas.width(), canvas.height(), canvas.width() as usize * 4))
}

/// Render to in-memory PNG bytes.
pub fn render_to_png_bytes(plotter: &Plotter) -> Result<Vec<u8>> {
    render_surface(plotter)?.to_png_bytes()
}

/// Render the plotter to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(plotter: &Plotter, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let data = render_to_png_bytes(plotter)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}
