// File: crates/plot-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots of representative plots with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the pixel comparison to ease first run.
// - Always decodes the PNG and checks its size and that the curve was drawn.

use plot_core::{PlotConfig, PlotEvent, Plotter, WheelDirection};
use plot_render_skia::render_to_png_bytes;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8], plotter: &Plotter) {
    let got = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let canvas = plotter.canvas();
    assert_eq!(got.dimensions(), (canvas.width(), canvas.height()), "{name}: size");
    let curve = plotter.renderer().theme().curve.color;
    let near = |a: u8, b: u8| a.abs_diff(b) <= 40;
    assert!(
        got.pixels().any(|p| near(p.0[0], curve.r) && near(p.0[1], curve.g) && near(p.0[2], curve.b)),
        "{name}: curve not drawn"
    );

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn plot(function: &str, theme: &str) -> Plotter {
    let config = PlotConfig { function_str: function.into(), theme: theme.into(), ..PlotConfig::default() };
    Plotter::new(config).expect("valid config")
}

#[test]
fn golden_sine() {
    let p = plot("sin(x)", "light");
    let bytes = render_to_png_bytes(&p).expect("render bytes");
    write_or_compare("sine.png", &bytes, &p);
}

#[test]
fn golden_tangent_dark() {
    let p = plot("tan(x)", "dark");
    let bytes = render_to_png_bytes(&p).expect("render bytes");
    write_or_compare("tangent_dark.png", &bytes, &p);
}

#[test]
fn golden_zoomed_reciprocal() {
    let mut p = plot("1/x", "light");
    for _ in 0..5 {
        p.handle(PlotEvent::Wheel { direction: WheelDirection::In, x: 420.0, y: 120.0 });
    }
    p.handle(PlotEvent::PointerDown { x: 200.0, y: 200.0 });
    p.handle(PlotEvent::PointerMove { x: 260.0, y: 230.0 });
    p.handle(PlotEvent::PointerUp);
    let bytes = render_to_png_bytes(&p).expect("render bytes");
    write_or_compare("reciprocal_zoomed.png", &bytes, &p);
}
